use std::collections::BTreeMap;

use log::{debug, trace, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::LoanRecord;
use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::events::{Event, EventStore};
use crate::interest::{continuous_interest, elapsed_years};
use crate::loan::Loan;
use crate::payments::{apply_to_loan, highest_potential_interest, select_next};
use crate::types::{ExcessRule, LoanType, TimeUnit};

/// largest relative gap tolerated between money paid in and money accounted for
const PAYMENT_TOLERANCE: Decimal = dec!(0.01);

/// outstanding balances summed over active loans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TotalDebt {
    pub principal: Money,
    pub interest: Money,
}

impl TotalDebt {
    pub fn total(&self) -> Money {
        self.principal + self.interest
    }
}

/// portfolio of active loans plus lifetime payment totals
///
/// Loans are keyed by name and iterated in name order, which keeps payment
/// routing and distributions deterministic. A loan leaves the active set the
/// moment a payment clears both its interest and principal; its state at
/// creation stays available through the initial snapshots.
#[derive(Debug, Clone, Default)]
pub struct LoanLedger {
    loans: BTreeMap<String, Loan>,
    initial_loans: BTreeMap<String, Loan>,
    total_paid: Money,
    interest_paid: Money,
    principal_paid: Money,
    events: EventStore,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// build a ledger from a roster of loan records
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a LoanRecord>) -> Result<Self> {
        let mut ledger = Self::new();
        for record in records {
            ledger.add_record(record)?;
        }
        Ok(ledger)
    }

    /// register a new loan; `loan_type` is resolved against the supported types
    pub fn add_loan(
        &mut self,
        name: &str,
        loan_type: &str,
        rate: Rate,
        principal: Money,
        interest: Money,
    ) -> Result<()> {
        let loan_type: LoanType = loan_type.parse()?;
        if self.loans.contains_key(name) {
            return Err(LedgerError::DuplicateName {
                name: name.to_string(),
            });
        }

        let loan = Loan::new(name, rate, loan_type, principal, interest)?;
        debug!("adding loan {name}: principal {principal}, interest {interest}, rate {rate}");

        self.events.emit(Event::LoanAdded {
            name: loan.name.clone(),
            loan_type,
            rate,
            principal,
            interest,
        });
        self.initial_loans.insert(loan.name.clone(), loan.snapshot());
        self.loans.insert(loan.name.clone(), loan);
        Ok(())
    }

    pub fn add_record(&mut self, record: &LoanRecord) -> Result<()> {
        self.add_loan(
            &record.name,
            &record.loan_type,
            record.rate,
            record.principal,
            record.interest,
        )
    }

    /// recompute every active loan's unpaid interest for the elapsed time
    ///
    /// The result replaces the loan's unpaid interest rather than adding to
    /// it: two accruals without a payment in between leave the value of the
    /// last one.
    pub fn accrue_interest(&mut self, amount_of_time: Decimal, time_unit: TimeUnit) -> Result<()> {
        let years = elapsed_years(amount_of_time, time_unit)?;
        let accrued = self
            .loans
            .values()
            .map(|loan| continuous_interest(loan.principal, loan.rate, years))
            .collect::<Result<Vec<_>>>()?;

        for (loan, interest) in self.loans.values_mut().zip(accrued) {
            trace!("{}: accrued {interest} over {amount_of_time} {time_unit}", loan.name);
            loan.interest = interest;
            self.events.emit(Event::InterestAccrued {
                name: loan.name.clone(),
                amount: interest,
            });
        }
        Ok(())
    }

    /// move unpaid interest into principal for the matching loans
    ///
    /// A name selects only that loan and overrides any type filter; a type
    /// alone selects every loan of that type; neither selects all loans.
    /// Returns the total amount capitalized.
    pub fn recapitalize(&mut self, loan_type: Option<LoanType>, loan_name: Option<&str>) -> Money {
        let mut capitalized = Money::ZERO;

        for loan in self.loans.values_mut() {
            let selected = match (loan_name, loan_type) {
                (Some(name), _) => loan.name == name,
                (None, Some(loan_type)) => loan.loan_type == loan_type,
                (None, None) => true,
            };
            if !selected {
                continue;
            }

            let amount = loan.capitalize();
            if amount.is_zero() {
                continue;
            }
            debug!("{}: capitalized {amount}, principal now {}", loan.name, loan.principal);
            capitalized += amount;
            self.events.emit(Event::InterestCapitalized {
                name: loan.name.clone(),
                amount,
                new_principal: loan.principal,
            });
        }

        capitalized
    }

    /// apply `amount` to `loan_name`, routing leftovers with `excess_rule`
    ///
    /// Money goes to unpaid interest first, then principal. Once a loan is
    /// cleared it is retired and whatever is left moves on to the loan chosen
    /// by `excess_rule`. Money that cannot be placed (no rule, or no active
    /// loan left) is returned and excluded from the lifetime totals.
    pub fn apply_payment(
        &mut self,
        loan_name: &str,
        amount: Money,
        excess_rule: Option<ExcessRule>,
    ) -> Result<Money> {
        if amount.is_negative() {
            return Err(LedgerError::Validation {
                message: format!("payment amount {amount} is negative"),
            });
        }

        self.total_paid += amount;
        let mut remaining = amount;
        let mut target = Some(loan_name.to_string()).filter(|name| self.loans.contains_key(name));

        // each pass either absorbs the remainder or retires a loan
        for _ in 0..=self.loans.len() {
            let name = match target.take() {
                Some(name) => name,
                None => match excess_rule.and_then(|rule| select_next(&self.loans, rule)) {
                    Some(name) => name.to_string(),
                    None => break,
                },
            };
            let Some(loan) = self.loans.get_mut(&name) else {
                break;
            };

            let application = apply_to_loan(loan, remaining);
            let retired = loan.is_retired();

            self.interest_paid += application.to_interest;
            self.principal_paid += application.to_principal;
            remaining = application.excess;
            self.events.emit(Event::PaymentApplied {
                name: name.clone(),
                applied_to_interest: application.to_interest,
                applied_to_principal: application.to_principal,
            });

            if retired {
                self.retire(&name);
            }
            if remaining.is_zero() {
                return Ok(Money::ZERO);
            }
        }

        self.total_paid -= remaining;
        if remaining.is_positive() {
            if self.debt_free() {
                debug!("portfolio repaid, returning {remaining} of {amount}");
            } else {
                warn!("could not apply {remaining} of {amount} (excess rule {excess_rule:?})");
            }
            self.events.emit(Event::PaymentRejected {
                amount: remaining,
                excess_rule,
            });
        }
        Ok(remaining)
    }

    /// same as [`apply_payment`](Self::apply_payment) with the rule given by
    /// name; an unrecognized name routes nothing
    pub fn apply_payment_with_rule_name(
        &mut self,
        loan_name: &str,
        amount: Money,
        excess_rule: &str,
    ) -> Result<Money> {
        let rule = match excess_rule.parse::<ExcessRule>() {
            Ok(rule) => Some(rule),
            Err(err) => {
                debug!("{err}");
                None
            }
        };
        self.apply_payment(loan_name, amount, rule)
    }

    fn retire(&mut self, name: &str) {
        if self.loans.remove(name).is_some() {
            debug!("{name} is paid off");
            self.events.emit(Event::LoanRetired {
                name: name.to_string(),
            });
        }
    }

    pub fn debt_free(&self) -> bool {
        self.loans.is_empty()
    }

    pub fn total_debt(&self) -> TotalDebt {
        TotalDebt {
            principal: self.loans.values().map(|loan| loan.principal).sum(),
            interest: self.loans.values().map(|loan| loan.interest).sum(),
        }
    }

    /// each loan's share of the total outstanding debt
    pub fn balance_distribution(&self) -> Result<BTreeMap<String, Rate>> {
        self.distribution("balance", |loan| loan.balance().as_decimal())
    }

    /// each loan's share of the summed interest rates
    pub fn interest_distribution(&self) -> Result<BTreeMap<String, Rate>> {
        self.distribution("interest rate", |loan| loan.rate.as_decimal())
    }

    fn distribution(
        &self,
        basis: &str,
        weight: impl Fn(&Loan) -> Decimal,
    ) -> Result<BTreeMap<String, Rate>> {
        let total: Decimal = self.loans.values().map(&weight).sum();
        if total.is_zero() {
            return Err(LedgerError::EmptyDistribution {
                basis: basis.to_string(),
            });
        }

        Ok(self
            .loans
            .values()
            .map(|loan| (loan.name.clone(), Rate::from_decimal(weight(loan) / total)))
            .collect())
    }

    pub fn initial_balance(&self) -> Money {
        self.initial_loans.values().map(|loan| loan.principal).sum()
    }

    pub fn initial_interest(&self) -> Money {
        self.initial_loans.values().map(|loan| loan.interest).sum()
    }

    pub fn initial_debt(&self) -> Money {
        self.initial_balance() + self.initial_interest()
    }

    /// active loan carrying the most unpaid interest
    pub fn largest_interest_rate(&self) -> Option<&str> {
        select_next(&self.loans, ExcessRule::LargestInterest)
    }

    /// active loan carrying the least unpaid interest
    pub fn smallest_interest_rate(&self) -> Option<&str> {
        select_next(&self.loans, ExcessRule::LowestInterest)
    }

    pub fn largest_balance(&self) -> Option<&str> {
        select_next(&self.loans, ExcessRule::LargestBalance)
    }

    pub fn smallest_balance(&self) -> Option<&str> {
        select_next(&self.loans, ExcessRule::LowestPrincipal)
    }

    pub fn highest_potential_interest(&self) -> Option<&str> {
        highest_potential_interest(&self.loans)
    }

    pub fn total_paid(&self) -> Money {
        self.total_paid
    }

    pub fn interest_paid(&self) -> Money {
        self.interest_paid
    }

    pub fn principal_paid(&self) -> Money {
        self.principal_paid
    }

    /// verify that every unit paid in was applied to interest or principal
    pub fn check_payments(&self) -> Result<()> {
        let accounted = self.interest_paid + self.principal_paid;
        let gap = (self.total_paid - accounted).abs();

        let consistent = match gap.fraction_of(self.total_paid) {
            Some(share) => share.as_decimal() <= PAYMENT_TOLERANCE,
            None => accounted.is_zero(),
        };
        if consistent {
            Ok(())
        } else {
            Err(LedgerError::Consistency {
                total_paid: self.total_paid,
                interest_paid: self.interest_paid,
                principal_paid: self.principal_paid,
            })
        }
    }

    pub fn loan(&self, name: &str) -> Option<&Loan> {
        self.loans.get(name)
    }

    pub fn initial_loan(&self, name: &str) -> Option<&Loan> {
        self.initial_loans.get(name)
    }

    /// active loans in name order
    pub fn loans(&self) -> impl Iterator<Item = &Loan> {
        self.loans.values()
    }

    pub fn initial_loans(&self) -> impl Iterator<Item = &Loan> {
        self.initial_loans.values()
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}
