use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::types::LoanType;

/// one loan's identity and current balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub name: String,
    pub loan_type: LoanType,
    /// annual fractional rate
    pub rate: Rate,
    pub principal: Money,
    /// accrued, unpaid interest
    pub interest: Money,
}

impl Loan {
    pub fn new(
        name: impl Into<String>,
        rate: Rate,
        loan_type: LoanType,
        principal: Money,
        interest: Money,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(LedgerError::Validation {
                message: "loan name must not be empty".to_string(),
            });
        }
        if rate.is_negative() {
            return Err(LedgerError::Validation {
                message: format!("{name}: interest rate {rate} is negative"),
            });
        }
        if principal.is_negative() {
            return Err(LedgerError::Validation {
                message: format!("{name}: principal {principal} is negative"),
            });
        }
        if interest.is_negative() {
            return Err(LedgerError::Validation {
                message: format!("{name}: interest {interest} is negative"),
            });
        }

        Ok(Self {
            name,
            loan_type,
            rate,
            principal,
            interest,
        })
    }

    /// independent copy used to freeze the loan's state
    pub fn snapshot(&self) -> Loan {
        self.clone()
    }

    pub fn balance(&self) -> Money {
        self.principal + self.interest
    }

    pub fn is_retired(&self) -> bool {
        self.principal.is_zero() && self.interest.is_zero()
    }

    /// interest a full year would add at the current principal, before compounding
    pub fn potential_interest(&self) -> Money {
        self.principal * self.rate.as_decimal()
    }

    /// fold unpaid interest into principal, returning the amount moved
    pub fn capitalize(&mut self) -> Money {
        let amount = self.interest;
        self.principal += amount;
        self.interest = Money::ZERO;
        amount
    }
}
