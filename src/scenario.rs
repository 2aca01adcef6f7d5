//! Scenario runner for batch amortization comparisons
//!
//! Holds one engine configuration and runs many loans or many extra-payment
//! amounts against it. Runs are independent, so batches fan out on rayon.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::amortization::{AmortizationConfig, AmortizationEngine, AmortizationResult};
use crate::loan::{ExtraPaymentMode, LoanInputs, LoanRecord};

/// Outcome of one extra-payment amount in a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub extra_payment_amount: f64,
    pub total_savings: f64,
    pub months_saved: u32,
    pub years_to_payoff: f64,
}

impl SweepPoint {
    fn from_result(amount: f64, result: &AmortizationResult) -> Self {
        Self {
            extra_payment_amount: amount,
            total_savings: result.total_savings,
            months_saved: result.months_saved,
            years_to_payoff: result.years_to_payoff,
        }
    }
}

/// One-time and monthly application of the same extra amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeComparison {
    pub one_time: AmortizationResult,
    pub monthly: AmortizationResult,
}

/// Pre-configured runner for batch comparisons
///
/// # Example
/// ```
/// use mortgage_payoff::{LoanInputs, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let points = runner.sweep_extra_payments(&LoanInputs::default(), &[0.0, 250.0, 500.0]);
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[0].months_saved, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: AmortizationEngine,
}

impl ScenarioRunner {
    /// Create runner with the default engine configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a specific engine configuration
    pub fn with_config(config: AmortizationConfig) -> Self {
        Self {
            engine: AmortizationEngine::new(config),
        }
    }

    /// Run a single comparison
    pub fn run(&self, inputs: &LoanInputs) -> AmortizationResult {
        self.engine.compute(inputs)
    }

    /// Run many loans in parallel, results in input order
    pub fn run_batch(&self, loans: &[LoanInputs]) -> Vec<AmortizationResult> {
        log::info!("Running {} loans", loans.len());
        loans.par_iter().map(|loan| self.engine.compute(loan)).collect()
    }

    /// Run loaded records in parallel, keeping their identifiers
    pub fn run_records(&self, records: &[LoanRecord]) -> Vec<(String, AmortizationResult)> {
        log::info!("Running {} loan records", records.len());
        records
            .par_iter()
            .map(|record| (record.loan_id.clone(), self.engine.compute(&record.inputs)))
            .collect()
    }

    /// Vary only the extra payment amount, one point per amount in the order given
    pub fn sweep_extra_payments(&self, base: &LoanInputs, amounts: &[f64]) -> Vec<SweepPoint> {
        amounts
            .par_iter()
            .map(|&amount| {
                let result = self.engine.compute(&base.with_extra_payment(amount));
                SweepPoint::from_result(amount, &result)
            })
            .collect()
    }

    /// Apply the same extra amount once and monthly
    pub fn compare_modes(&self, base: &LoanInputs) -> ModeComparison {
        let (one_time, monthly) = rayon::join(
            || self.engine.compute(&base.with_mode(ExtraPaymentMode::OneTime)),
            || self.engine.compute(&base.with_mode(ExtraPaymentMode::Monthly)),
        );
        ModeComparison { one_time, monthly }
    }

    pub fn engine(&self) -> &AmortizationEngine {
        &self.engine
    }
}
