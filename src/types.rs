use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LedgerError;

/// loan types, each selects its own accrual and capitalization rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanType {
    StudentLoan,
}

impl LoanType {
    pub const ALL: [LoanType; 1] = [LoanType::StudentLoan];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::StudentLoan => "StudentLoan",
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoanType::ALL
            .into_iter()
            .find(|loan_type| loan_type.as_str() == s)
            .ok_or_else(|| LedgerError::UnsupportedType {
                loan_type: s.to_string(),
                available: join(LoanType::ALL.iter().map(LoanType::as_str)),
            })
    }
}

/// unit of elapsed time for interest accrual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    /// number of this unit in one year
    pub fn per_year(&self) -> Decimal {
        match self {
            TimeUnit::Second => Decimal::from(31_536_000),
            TimeUnit::Minute => Decimal::from(525_600),
            TimeUnit::Hour => Decimal::from(8_760),
            TimeUnit::Day => Decimal::from(365),
            TimeUnit::Month => Decimal::from(12),
            TimeUnit::Year => Decimal::ONE,
        }
    }

    /// convert an amount of this unit to fractional years
    pub fn to_years(&self, amount: Decimal) -> Decimal {
        amount / self.per_year()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = s.to_lowercase();
        TimeUnit::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == unit)
            .ok_or_else(|| LedgerError::UnsupportedUnit {
                unit: s.to_string(),
                available: join(TimeUnit::ALL.iter().map(TimeUnit::as_str)),
            })
    }
}

/// rule choosing the next loan to receive money left over once a loan is retired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcessRule {
    /// loan carrying the most unpaid interest
    LargestInterest,
    /// loan carrying the least unpaid interest
    LowestInterest,
    /// loan with the largest principal
    LargestBalance,
    /// loan with the smallest principal
    LowestPrincipal,
}

impl ExcessRule {
    pub const ALL: [ExcessRule; 4] = [
        ExcessRule::LargestInterest,
        ExcessRule::LowestInterest,
        ExcessRule::LargestBalance,
        ExcessRule::LowestPrincipal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExcessRule::LargestInterest => "largest_interest",
            ExcessRule::LowestInterest => "lowest_interest",
            ExcessRule::LargestBalance => "largest_balance",
            ExcessRule::LowestPrincipal => "lowest_principal",
        }
    }
}

impl fmt::Display for ExcessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExcessRule {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "largest_interest" | "largest_interest_rate" => Ok(ExcessRule::LargestInterest),
            "lowest_interest" | "smallest_interest" | "smallest_interest_rate" => {
                Ok(ExcessRule::LowestInterest)
            }
            "largest_balance" | "largest_principal" => Ok(ExcessRule::LargestBalance),
            "lowest_principal" | "lowest_balance" | "smallest_principal" | "smallest_balance" => {
                Ok(ExcessRule::LowestPrincipal)
            }
            _ => Err(LedgerError::UnsupportedRule {
                rule: s.to_string(),
                available: join(ExcessRule::ALL.iter().map(ExcessRule::as_str)),
            }),
        }
    }
}

pub(crate) fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
