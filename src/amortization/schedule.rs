//! Amortization output structures

use serde::{Deserialize, Serialize};

/// Snapshot of both schedules at a given month, used for charting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSample {
    /// Month number (1-indexed)
    pub month: u32,

    /// Loan year containing this month (ceil(month / 12))
    pub year: u32,

    pub standard_balance: f64,
    pub accelerated_balance: f64,

    /// Cumulative interest paid on the standard schedule
    pub standard_interest_paid: f64,

    /// Cumulative interest paid on the accelerated schedule
    pub accelerated_interest_paid: f64,
}

/// One full month of both schedules, for exporting a complete table
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub year: u32,

    // Standard leg
    pub standard_interest: f64,
    pub standard_principal: f64,
    pub standard_balance: f64,

    // Accelerated leg (zeros after payoff)
    pub accelerated_interest: f64,
    pub accelerated_principal: f64,
    pub accelerated_extra: f64,
    pub accelerated_balance: f64,
}

/// Loan year containing a 1-indexed month
pub fn year_of_month(month: u32) -> u32 {
    month.div_ceil(12)
}

/// Complete comparison of the standard and accelerated schedules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Sparse samples (month 1, every sampling interval, final month)
    pub samples: Vec<AmortizationSample>,

    /// Every month, only populated when the engine is configured to record it
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monthly: Vec<ScheduleRow>,

    /// Interest over the full standard term
    pub total_interest_standard: f64,

    /// Interest until the accelerated schedule is retired
    pub total_interest_accelerated: f64,

    /// total_interest_standard - total_interest_accelerated
    pub total_savings: f64,

    /// Months by which the accelerated loan finishes before the contractual term
    pub months_saved: u32,

    /// Payments the accelerated schedule makes before it is retired
    pub months_to_payoff: u32,

    /// Level payment of the standard schedule
    pub standard_monthly_payment: f64,

    /// (total_months - months_saved) / 12
    pub years_to_payoff: f64,
}

impl AmortizationResult {
    /// Last recorded sample, if any months were simulated
    pub fn final_sample(&self) -> Option<&AmortizationSample> {
        self.samples.last()
    }

    /// Get summary statistics
    pub fn summary(&self) -> AmortizationSummary {
        let savings_pct = if self.total_interest_standard > 0.0 {
            self.total_savings / self.total_interest_standard * 100.0
        } else {
            0.0
        };

        AmortizationSummary {
            standard_monthly_payment: self.standard_monthly_payment,
            total_interest_standard: self.total_interest_standard,
            total_interest_accelerated: self.total_interest_accelerated,
            total_savings: self.total_savings,
            savings_pct,
            months_saved: self.months_saved,
            years_to_payoff: self.years_to_payoff,
        }
    }
}

/// Headline figures for a single comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSummary {
    pub standard_monthly_payment: f64,
    pub total_interest_standard: f64,
    pub total_interest_accelerated: f64,
    pub total_savings: f64,
    /// Share of standard-schedule interest avoided, in percent
    pub savings_pct: f64,
    pub months_saved: u32,
    pub years_to_payoff: f64,
}
