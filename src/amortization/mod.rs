//! Amortization engine for standard vs accelerated payoff comparisons

mod state;
mod engine;
mod schedule;
mod payment;

pub use state::{LegState, PaymentSplit};
pub use engine::{compute, AmortizationConfig, AmortizationEngine};
pub use schedule::{year_of_month, AmortizationResult, AmortizationSample, AmortizationSummary, ScheduleRow};
pub use payment::level_payment;
