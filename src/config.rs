use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::types::{LoanType, TimeUnit};

/// default cap on simulation steps: a century of monthly payments
pub const DEFAULT_MAX_STEPS: u32 = 1200;

/// one loan of a roster, as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub name: String,
    /// type tag, resolved when the loan is added to a ledger
    pub loan_type: String,
    pub rate: Rate,
    pub principal: Money,
    #[serde(default)]
    pub interest: Money,
}

impl LoanRecord {
    pub fn new(name: &str, loan_type: LoanType, rate: Rate, principal: Money) -> Self {
        Self {
            name: name.to_string(),
            loan_type: loan_type.to_string(),
            rate,
            principal,
            interest: Money::ZERO,
        }
    }

    pub fn with_interest(mut self, interest: Money) -> Self {
        self.interest = interest;
        self
    }
}

/// simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// money paid into the portfolio every step
    pub payment: Money,
    /// length of one step
    #[serde(default = "default_time_unit")]
    pub time_unit: TimeUnit,
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,
    pub loans: Vec<LoanRecord>,
}

fn default_time_unit() -> TimeUnit {
    TimeUnit::Month
}

fn default_max_steps() -> u32 {
    DEFAULT_MAX_STEPS
}

impl SimulationConfig {
    pub fn new(payment: Money, loans: Vec<LoanRecord>) -> Self {
        Self {
            payment,
            time_unit: default_time_unit(),
            max_steps: default_max_steps(),
            loans,
        }
    }

    /// four federal student loans repaid monthly
    pub fn student_loans(payment: Money) -> Self {
        let loan = |name: &str, rate, principal| {
            LoanRecord::new(
                name,
                LoanType::StudentLoan,
                Rate::from_decimal(rate),
                Money::from_decimal(principal),
            )
        };

        Self::new(
            payment,
            vec![
                loan("loan_641", dec!(0.0641), dec!(6507.64)),
                loan("loan_541", dec!(0.0541), dec!(21263.06)),
                loan("loan_790", dec!(0.068), dec!(6994.65)),
                loan("loan_680", dec!(0.068), dec!(23562.73)),
            ],
        )
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| LedgerError::InvalidConfiguration {
                message: err.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| LedgerError::InvalidConfiguration {
            message: format!("{}: {err}", path.display()),
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.payment.is_positive() {
            return Err(LedgerError::InvalidConfiguration {
                message: format!("payment {} must be positive", self.payment),
            });
        }
        if self.max_steps == 0 {
            return Err(LedgerError::InvalidConfiguration {
                message: "max_steps must be at least 1".to_string(),
            });
        }
        if self.loans.is_empty() {
            return Err(LedgerError::InvalidConfiguration {
                message: "no loans configured".to_string(),
            });
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
