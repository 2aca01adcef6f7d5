//! Core amortization engine comparing standard and accelerated payoff

use crate::error::Result;
use crate::loan::{LoanInputs, MAX_TERM_YEARS};
use super::payment::level_payment;
use super::schedule::{year_of_month, AmortizationResult, AmortizationSample, ScheduleRow};
use super::state::{LegState, PaymentSplit};

/// Configuration for an amortization run
#[derive(Debug, Clone)]
pub struct AmortizationConfig {
    /// Months between chart samples (month 1 and the final month are always sampled)
    pub sample_interval_months: u32,

    /// Whether to record a full row for every month
    pub record_all_months: bool,
}

impl Default for AmortizationConfig {
    fn default() -> Self {
        Self {
            sample_interval_months: 12,
            record_all_months: false,
        }
    }
}

/// Amortization engine
///
/// Walks the standard and accelerated schedules side by side for the full
/// contractual term. The engine holds no state between runs.
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    config: AmortizationConfig,
}

impl AmortizationEngine {
    /// Create a new engine with the given config
    pub fn new(config: AmortizationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AmortizationConfig {
        &self.config
    }

    /// Validate the inputs, then compute
    pub fn try_compute(&self, inputs: &LoanInputs) -> Result<AmortizationResult> {
        inputs.validate()?;
        Ok(self.compute(inputs))
    }

    /// Compute the comparison for one loan.
    ///
    /// Never fails: degenerate inputs (zero term, negative balance) produce a
    /// finite, possibly empty, result. Terms beyond `MAX_TERM_YEARS` are not
    /// simulated and give the same empty result as a zero term.
    pub fn compute(&self, inputs: &LoanInputs) -> AmortizationResult {
        if let Err(e) = inputs.validate() {
            log::warn!("Computing with degenerate loan inputs: {}", e);
        }

        let monthly_rate = inputs.monthly_rate();
        // At most MAX_TERM_YEARS * 12, so fits in u32
        let total_months = if inputs.term_years > MAX_TERM_YEARS {
            0
        } else {
            inputs.total_months() as u32
        };
        let payment = level_payment(inputs.principal, monthly_rate, total_months);

        let mut standard = LegState::new(inputs.principal);
        let mut accelerated = LegState::new(inputs.principal);
        let mut months_saved = 0;

        let mut samples = Vec::new();
        let mut monthly = Vec::new();
        if self.config.record_all_months {
            monthly.reserve(total_months as usize);
        }

        for month in 1..=total_months {
            // Standard leg always runs the full term
            let std_split = standard.apply_payment(monthly_rate, payment, 0.0);

            let mut acc_split = PaymentSplit::default();
            let mut extra = 0.0;
            if !accelerated.is_finished() {
                extra = inputs
                    .extra_payment_mode
                    .extra_for_month(month, inputs.extra_payment_amount);
                acc_split = accelerated.apply_payment(monthly_rate, payment, extra);

                if accelerated.check_payoff(month) {
                    months_saved = total_months - month;
                    log::debug!(
                        "Accelerated schedule retired in month {} ({} months early)",
                        month,
                        months_saved
                    );
                }
            }

            if self.should_sample(month, total_months) {
                samples.push(AmortizationSample {
                    month,
                    year: year_of_month(month),
                    standard_balance: standard.display_balance(),
                    accelerated_balance: accelerated.display_balance(),
                    standard_interest_paid: standard.interest_paid,
                    accelerated_interest_paid: accelerated.interest_paid,
                });
            }

            if self.config.record_all_months {
                monthly.push(ScheduleRow {
                    month,
                    year: year_of_month(month),
                    standard_interest: std_split.interest,
                    standard_principal: std_split.principal,
                    standard_balance: standard.display_balance(),
                    accelerated_interest: acc_split.interest,
                    accelerated_principal: acc_split.principal,
                    accelerated_extra: extra,
                    accelerated_balance: accelerated.display_balance(),
                });
            }
        }

        AmortizationResult {
            samples,
            monthly,
            total_interest_standard: standard.interest_paid,
            total_interest_accelerated: accelerated.interest_paid,
            total_savings: standard.interest_paid - accelerated.interest_paid,
            months_saved,
            months_to_payoff: total_months - months_saved,
            standard_monthly_payment: payment,
            years_to_payoff: (total_months - months_saved) as f64 / 12.0,
        }
    }

    fn should_sample(&self, month: u32, total_months: u32) -> bool {
        let interval = self.config.sample_interval_months;
        month == 1 || (interval > 0 && month % interval == 0) || month == total_months
    }
}

/// Compute with the default configuration
pub fn compute(inputs: &LoanInputs) -> AmortizationResult {
    AmortizationEngine::default().compute(inputs)
}
