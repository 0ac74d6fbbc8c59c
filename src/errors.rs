use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("invalid loan: {message}")]
    Validation {
        message: String,
    },

    #[error("loan with name {name} already exists")]
    DuplicateName {
        name: String,
    },

    #[error("loan type {loan_type} is not supported, available types are {available}")]
    UnsupportedType {
        loan_type: String,
        available: String,
    },

    #[error("time unit {unit} is not supported, available units are {available}")]
    UnsupportedUnit {
        unit: String,
        available: String,
    },

    #[error("excess rule {rule} is not supported, available rules are {available}")]
    UnsupportedRule {
        rule: String,
        available: String,
    },

    #[error("strategy {strategy} is not supported, available strategies are {available}")]
    UnsupportedStrategy {
        strategy: String,
        available: String,
    },

    #[error(
        "total payments must be the sum of interest and principal paid: \
         total {total_paid}, interest {interest_paid}, principal {principal_paid}"
    )]
    Consistency {
        total_paid: Money,
        interest_paid: Money,
        principal_paid: Money,
    },

    #[error("cannot distribute by {basis}: total is zero")]
    EmptyDistribution {
        basis: String,
    },

    #[error("calculation error: {message}")]
    Calculation {
        message: String,
    },

    #[error("portfolio not repaid after {steps} steps")]
    StepLimitExceeded {
        steps: u32,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
