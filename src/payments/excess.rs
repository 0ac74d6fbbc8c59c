use std::collections::BTreeMap;

use crate::loan::Loan;
use crate::types::ExcessRule;

/// pick the loan that receives leftover money under `rule`
///
/// Ties resolve like a stable ascending sort over iteration order: the
/// largest-* rules take the last of the tied loans, the lowest-* rules the
/// first. Returns None when no loan is active.
pub fn select_next(loans: &BTreeMap<String, Loan>, rule: ExcessRule) -> Option<&str> {
    let chosen = match rule {
        ExcessRule::LargestInterest => loans.values().max_by_key(|loan| loan.interest),
        ExcessRule::LowestInterest => loans.values().min_by_key(|loan| loan.interest),
        ExcessRule::LargestBalance => loans.values().max_by_key(|loan| loan.principal),
        ExcessRule::LowestPrincipal => loans.values().min_by_key(|loan| loan.principal),
    };
    chosen.map(|loan| loan.name.as_str())
}

/// loan whose principal would earn the most interest at its rate
pub fn highest_potential_interest(loans: &BTreeMap<String, Loan>) -> Option<&str> {
    loans
        .values()
        .max_by_key(|loan| loan.potential_interest())
        .map(|loan| loan.name.as_str())
}
