use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use loan_ledger::{Money, SimulationConfig, SimulationSummary, Simulator, Strategy, TimeUnit};

/// Compare loan repayment strategies
#[derive(Parser)]
#[command(
    name = "loan-ledger",
    version,
    about = "Simulate repaying a loan portfolio under different payment allocation strategies"
)]
struct Cli {
    /// Path to a JSON simulation config (defaults to the built-in student loan roster)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Payment made every step, overrides the config
    #[arg(long)]
    payment: Option<Money>,

    /// Strategy to run; all strategies run when omitted
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Length of one step, overrides the config
    #[arg(long)]
    unit: Option<TimeUnit>,

    /// Give up after this many steps, overrides the config
    #[arg(long)]
    max_steps: Option<u32>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Log every payoff
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

const DEFAULT_PAYMENT: i64 = 2000;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(err) = SimpleLogger::new().with_level(level).init() {
        eprintln!("failed to initialise logging: {err}");
    }

    match run(&cli) {
        Ok(summaries) => print_summaries(&summaries, &cli.format),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> loan_ledger::Result<Vec<SimulationSummary>> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::student_loans(Money::from_major(DEFAULT_PAYMENT)),
    };
    if let Some(payment) = cli.payment {
        config.payment = payment;
    }
    if let Some(unit) = cli.unit {
        config.time_unit = unit;
    }
    if let Some(max_steps) = cli.max_steps {
        config.max_steps = max_steps;
    }

    let simulator = Simulator::new(config)?;
    match cli.strategy {
        Some(strategy) => Ok(vec![simulator.run(strategy)?]),
        None => simulator.run_all(),
    }
}

fn print_summaries(summaries: &[SimulationSummary], format: &OutputFormat) {
    match format {
        OutputFormat::Text => {
            for summary in summaries {
                println!("{summary}");
                for payoff in &summary.payoffs {
                    println!(
                        "\t{} paid off after {} {}s",
                        payoff.name, payoff.step, summary.time_unit
                    );
                }
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(summaries) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(1);
            }
        },
    }
}
