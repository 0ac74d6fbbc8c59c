use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{ExcessRule, LoanType};

/// all events that can be emitted by the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    LoanAdded {
        name: String,
        loan_type: LoanType,
        rate: Rate,
        principal: Money,
        interest: Money,
    },
    InterestAccrued {
        name: String,
        amount: Money,
    },
    InterestCapitalized {
        name: String,
        amount: Money,
        new_principal: Money,
    },
    PaymentApplied {
        name: String,
        applied_to_interest: Money,
        applied_to_principal: Money,
    },
    LoanRetired {
        name: String,
    },
    /// money handed back to the caller instead of being applied
    PaymentRejected {
        amount: Money,
        excess_rule: Option<ExcessRule>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
