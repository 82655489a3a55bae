pub mod account;
pub mod batch;

pub use account::{AccountReport, CheckOutcome};
pub use batch::{BatchSummary, EligibilityChecker};
