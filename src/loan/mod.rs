//! Loan inputs and batch loading

mod data;
pub mod loader;

pub use data::{ExtraPaymentMode, LoanInputs, MAX_TERM_YEARS};
pub use loader::{load_loans, load_loans_from_reader, LoanRecord};
