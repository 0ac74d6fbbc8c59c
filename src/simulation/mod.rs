pub mod strategy;

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, info};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::events::Event;
use crate::ledger::LoanLedger;
use crate::types::{ExcessRule, TimeUnit};

pub use strategy::Strategy;

/// step at which a loan was paid off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payoff {
    pub name: String,
    pub step: u32,
}

/// outcome of repaying a portfolio with one strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub strategy: Strategy,
    pub steps: u32,
    pub time_unit: TimeUnit,
    pub years: Decimal,
    pub total_paid: Money,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub initial_balance: Money,
    pub initial_debt: Money,
    pub payoffs: Vec<Payoff>,
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: total paid {}, principal {}, total interest {}, in {} {}s, {} years",
            self.strategy.description(),
            self.total_paid.round_dp(2),
            self.initial_balance.round_dp(2),
            self.interest_paid.round_dp(2),
            self.steps,
            self.time_unit,
            self.years.round_dp(2),
        )
    }
}

/// drives a fresh ledger through repeated accrue-then-pay steps
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// run every strategy, each on its own ledger
    pub fn run_all(&self) -> Result<Vec<SimulationSummary>> {
        Strategy::ALL.iter().map(|strategy| self.run(*strategy)).collect()
    }

    pub fn run(&self, strategy: Strategy) -> Result<SimulationSummary> {
        let mut ledger = LoanLedger::from_records(&self.config.loans)?;
        ledger.take_events();

        let payment = self.config.payment;
        let rule = strategy.excess_rule();
        let mut target = strategy.focus(&ledger);
        let mut payoffs = Vec::new();
        let mut steps = 0;

        while !ledger.debt_free() {
            if steps >= self.config.max_steps {
                return Err(LedgerError::StepLimitExceeded { steps });
            }
            ledger.accrue_interest(Decimal::ONE, self.config.time_unit)?;
            steps += 1;

            match strategy {
                Strategy::BalanceProportional => {
                    let distribution = ledger.balance_distribution()?;
                    pay_by_distribution(&mut ledger, payment, &distribution, rule)?;
                }
                Strategy::InterestProportional => {
                    let distribution = ledger.interest_distribution()?;
                    pay_by_distribution(&mut ledger, payment, &distribution, rule)?;
                }
                Strategy::Snowball | Strategy::Avalanche => {
                    if let Some(name) = &target {
                        ledger.apply_payment(name, payment, Some(rule))?;
                    }
                    // stay on the same loan until it is gone
                    if target.as_deref().map_or(true, |name| ledger.loan(name).is_none()) {
                        target = strategy.focus(&ledger);
                    }
                }
                Strategy::HighestPotentialInterest => {
                    if let Some(name) = strategy.focus(&ledger) {
                        ledger.apply_payment(&name, payment, Some(rule))?;
                    }
                }
            }
            ledger.check_payments()?;

            for event in ledger.take_events() {
                if let Event::LoanRetired { name } = event {
                    debug!("{strategy}: {name} paid off after {steps} {}s", self.config.time_unit);
                    payoffs.push(Payoff { name, step: steps });
                }
            }
        }

        let summary = SimulationSummary {
            strategy,
            steps,
            time_unit: self.config.time_unit,
            years: self.config.time_unit.to_years(Decimal::from(steps)),
            total_paid: ledger.total_paid(),
            principal_paid: ledger.principal_paid(),
            interest_paid: ledger.interest_paid(),
            initial_balance: ledger.initial_balance(),
            initial_debt: ledger.initial_debt(),
            payoffs,
        };
        info!("{summary}");
        Ok(summary)
    }
}

/// pay each loan its share of `payment`; the share of a loan retired earlier
/// in the same step is routed by `rule`
fn pay_by_distribution(
    ledger: &mut LoanLedger,
    payment: Money,
    distribution: &BTreeMap<String, Rate>,
    rule: ExcessRule,
) -> Result<()> {
    for (name, share) in distribution {
        ledger.apply_payment(name, payment.portion(*share), Some(rule))?;
        ledger.check_payments()?;
    }
    Ok(())
}
