use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::loan::Loan;

/// how one payment was split across a single loan's balances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaymentApplication {
    pub to_interest: Money,
    pub to_principal: Money,
    /// money left over once both balances are cleared
    pub excess: Money,
}

impl PaymentApplication {
    pub fn total_applied(&self) -> Money {
        self.to_interest + self.to_principal
    }
}

#[derive(Debug, Clone, Copy)]
enum PaymentComponent {
    Interest,
    Principal,
}

/// apply `available` to a loan: unpaid interest first, then principal
pub fn apply_to_loan(loan: &mut Loan, available: Money) -> PaymentApplication {
    let mut application = PaymentApplication::default();
    let mut remaining = available;

    for component in [PaymentComponent::Interest, PaymentComponent::Principal] {
        remaining = apply_to_component(component, remaining, loan, &mut application);
        if remaining.is_zero() {
            break;
        }
    }

    application.excess = remaining;
    application
}

fn apply_to_component(
    component: PaymentComponent,
    available: Money,
    loan: &mut Loan,
    application: &mut PaymentApplication,
) -> Money {
    let (balance, applied_field) = match component {
        PaymentComponent::Interest => (&mut loan.interest, &mut application.to_interest),
        PaymentComponent::Principal => (&mut loan.principal, &mut application.to_principal),
    };

    let payment = available.min(*balance);
    *balance -= payment;
    *applied_field = payment;

    available - payment
}
