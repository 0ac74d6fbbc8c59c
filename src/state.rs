/// serialization support for the ledger
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::ledger::{LoanLedger, TotalDebt};
use crate::types::LoanType;

/// serializable view of a ledger's state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerView {
    pub debt_free: bool,
    pub active_loans: Vec<LoanView>,
    pub outstanding: TotalDebt,
    pub payments: PaymentView,
    pub initial: InitialView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanView {
    pub name: String,
    pub loan_type: LoanType,
    pub rate: Rate,
    pub principal: Money,
    pub interest: Money,
    pub balance: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentView {
    pub total_paid: Money,
    pub interest_paid: Money,
    pub principal_paid: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialView {
    pub balance: Money,
    pub interest: Money,
    pub debt: Money,
    pub loan_count: usize,
}

impl LedgerView {
    pub fn from_ledger(ledger: &LoanLedger) -> Self {
        LedgerView {
            debt_free: ledger.debt_free(),
            active_loans: ledger
                .loans()
                .map(|loan| LoanView {
                    name: loan.name.clone(),
                    loan_type: loan.loan_type,
                    rate: loan.rate,
                    principal: loan.principal,
                    interest: loan.interest,
                    balance: loan.balance(),
                })
                .collect(),
            outstanding: ledger.total_debt(),
            payments: PaymentView {
                total_paid: ledger.total_paid(),
                interest_paid: ledger.interest_paid(),
                principal_paid: ledger.principal_paid(),
            },
            initial: InitialView {
                balance: ledger.initial_balance(),
                interest: ledger.initial_interest(),
                debt: ledger.initial_debt(),
                loan_count: ledger.initial_loans().count(),
            },
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
