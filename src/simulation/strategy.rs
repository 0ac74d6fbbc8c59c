use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LedgerError;
use crate::ledger::LoanLedger;
use crate::types::{join, ExcessRule};

/// how each step's payment is allocated across the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// split the payment by each loan's share of the outstanding balance
    BalanceProportional,
    /// split the payment by each loan's share of the summed rates
    InterestProportional,
    /// pay the smallest principal first
    Snowball,
    /// pay the largest principal first
    Avalanche,
    /// pay the loan whose principal would earn the most interest
    HighestPotentialInterest,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::BalanceProportional,
        Strategy::InterestProportional,
        Strategy::Snowball,
        Strategy::Avalanche,
        Strategy::HighestPotentialInterest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::BalanceProportional => "balance_proportional",
            Strategy::InterestProportional => "interest_proportional",
            Strategy::Snowball => "snowball",
            Strategy::Avalanche => "avalanche",
            Strategy::HighestPotentialInterest => "highest_potential_interest",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::BalanceProportional => "payment split by balance distribution",
            Strategy::InterestProportional => "payment split by interest rate distribution",
            Strategy::Snowball => "snowball method",
            Strategy::Avalanche => "avalanche method",
            Strategy::HighestPotentialInterest => "highest potential interest method",
        }
    }

    /// where money goes once the loan it was meant for is paid off
    pub fn excess_rule(&self) -> ExcessRule {
        match self {
            Strategy::BalanceProportional | Strategy::Avalanche => ExcessRule::LargestBalance,
            Strategy::InterestProportional | Strategy::HighestPotentialInterest => {
                ExcessRule::LargestInterest
            }
            Strategy::Snowball => ExcessRule::LowestPrincipal,
        }
    }

    /// loan a single-target strategy pays next, None for split strategies
    pub fn focus(&self, ledger: &LoanLedger) -> Option<String> {
        let name = match self {
            Strategy::Snowball => ledger.smallest_balance(),
            Strategy::Avalanche => ledger.largest_balance(),
            Strategy::HighestPotentialInterest => ledger.highest_potential_interest(),
            Strategy::BalanceProportional | Strategy::InterestProportional => None,
        };
        name.map(str::to_string)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "balance_proportional" | "balance" => Ok(Strategy::BalanceProportional),
            "interest_proportional" | "interest" => Ok(Strategy::InterestProportional),
            "snowball" => Ok(Strategy::Snowball),
            "avalanche" => Ok(Strategy::Avalanche),
            "highest_potential_interest" | "potential_interest" => {
                Ok(Strategy::HighestPotentialInterest)
            }
            _ => Err(LedgerError::UnsupportedStrategy {
                strategy: s.to_string(),
                available: join(Strategy::ALL.iter().map(Strategy::as_str)),
            }),
        }
    }
}
