//! Advisory commentary for a payoff comparison
//!
//! Builds the advisor prompt from the loan and its result, hands it to a
//! text-generation provider, and falls back to fixed sentences when the
//! provider is unavailable or answers with nothing. Failures stay here and
//! never touch the amortization result.

use thiserror::Error;

use crate::amortization::AmortizationResult;
use crate::loan::{ExtraPaymentMode, LoanInputs};
use crate::savings::TimeSaved;

/// Used when the provider fails
pub const FALLBACK_INSIGHT: &str = "Making extra payments is one of the most effective ways to build equity and save on long-term interest costs.";

/// Used when the provider succeeds but returns blank text
pub const EMPTY_REPLY_INSIGHT: &str = "Keep paying that extra! You're building wealth significantly faster.";

/// Errors from a text-generation provider
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("insight provider unavailable: {0}")]
    Unavailable(String),

    #[error("insight request failed: {0}")]
    Request(String),
}

/// Something that turns a prompt into free-text commentary
pub trait InsightProvider {
    fn generate(&self, prompt: &str) -> Result<String, InsightError>;
}

/// Provider used when no text-generation backend is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticInsightProvider;

impl InsightProvider for StaticInsightProvider {
    fn generate(&self, _prompt: &str) -> Result<String, InsightError> {
        Err(InsightError::Unavailable("no text-generation backend configured".to_string()))
    }
}

/// Advisor prompt for the given loan and result
pub fn build_prompt(inputs: &LoanInputs, result: &AmortizationResult) -> String {
    let cadence = match inputs.extra_payment_mode {
        ExtraPaymentMode::OneTime => "One-Time Extra Payment",
        ExtraPaymentMode::Monthly => "Extra Monthly Payment",
    };
    let saved = TimeSaved::from_months(result.months_saved);

    format!(
        "Act as a senior mortgage advisor. Analyze these results for a user:\n\
         Mortgage Balance: {}\n\
         Interest Rate: {}%\n\
         Standard Monthly Payment: {:.2}\n\
         {}: {}\n\
         Total Interest Saved: {:.2}\n\
         Time Saved: {}.\n\
         Provide a concise, motivating 3-sentence insight about how this extra payment impacts \
         their financial freedom and wealth building. Mention one specific \"future tip\" like \
         bi-weekly payments.",
        inputs.principal,
        inputs.annual_rate_percent,
        result.standard_monthly_payment,
        cadence,
        inputs.extra_payment_amount,
        result.total_savings,
        saved,
    )
}

/// Generates commentary through a provider, never failing
#[derive(Debug, Clone, Default)]
pub struct InsightAdvisor<P> {
    provider: P,
}

impl<P: InsightProvider> InsightAdvisor<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn advise(&self, inputs: &LoanInputs, result: &AmortizationResult) -> String {
        let prompt = build_prompt(inputs, result);
        match self.provider.generate(&prompt) {
            Ok(text) if text.trim().is_empty() => EMPTY_REPLY_INSIGHT.to_string(),
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                log::warn!("Insight generation failed, using fallback: {}", e);
                FALLBACK_INSIGHT.to_string()
            }
        }
    }
}
