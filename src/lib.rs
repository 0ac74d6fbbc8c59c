pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod ledger;
pub mod loan;
pub mod payments;
pub mod simulation;
pub mod state;
pub mod types;

// re-export key types
pub use config::{LoanRecord, SimulationConfig};
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use events::{Event, EventStore};
pub use ledger::{LoanLedger, TotalDebt};
pub use loan::Loan;
pub use payments::PaymentApplication;
pub use simulation::{Payoff, SimulationSummary, Simulator, Strategy};
pub use state::LedgerView;
pub use types::{ExcessRule, LoanType, TimeUnit};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
