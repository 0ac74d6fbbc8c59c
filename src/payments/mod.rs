pub mod excess;
pub mod waterfall;

pub use excess::{highest_potential_interest, select_next};
pub use waterfall::{apply_to_loan, PaymentApplication};
