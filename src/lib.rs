//! Mortgage payoff calculator - standard vs accelerated amortization
//!
//! This library provides:
//! - The amortization engine comparing a standard schedule with an accelerated
//!   one (one-time lump sum or recurring monthly overpayment)
//! - Loan input validation and CSV batch loading
//! - Presentation aggregates (periodic savings, time saved, payoff date)
//! - Currency display helpers and advisory commentary with fixed fallbacks
//! - A scenario runner for parallel batches and extra-payment sweeps

pub mod error;
pub mod loan;
pub mod amortization;
pub mod savings;
pub mod currency;
pub mod insight;
pub mod scenario;

// Re-export commonly used types
pub use error::{LoanError, Result};
pub use loan::{ExtraPaymentMode, LoanInputs, LoanRecord};
pub use amortization::{compute, AmortizationConfig, AmortizationEngine, AmortizationResult, AmortizationSample};
pub use savings::{PeriodicSavings, TimeSaved};
pub use scenario::{ScenarioRunner, SweepPoint};
