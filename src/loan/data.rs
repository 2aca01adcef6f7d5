//! Loan input structures for a single payoff comparison

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LoanError, Result};

/// Longest loan term accepted by validation
pub const MAX_TERM_YEARS: u32 = 100;

/// How the extra payment is applied to the accelerated schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraPaymentMode {
    /// Applied once, in the first month only
    OneTime,
    /// Applied every month until the accelerated loan is retired
    Monthly,
}

impl ExtraPaymentMode {
    /// Extra principal to apply in the given (1-indexed) month
    pub fn extra_for_month(&self, month: u32, amount: f64) -> f64 {
        match self {
            ExtraPaymentMode::OneTime if month == 1 => amount,
            ExtraPaymentMode::OneTime => 0.0,
            ExtraPaymentMode::Monthly => amount,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraPaymentMode::OneTime => "one-time",
            ExtraPaymentMode::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ExtraPaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtraPaymentMode {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one-time" | "one_time" | "onetime" | "lump" | "lump-sum" => Ok(ExtraPaymentMode::OneTime),
            "monthly" | "recurring" => Ok(ExtraPaymentMode::Monthly),
            other => Err(LoanError::UnknownMode(other.to_string())),
        }
    }
}

/// User-provided loan terms and extra-payment strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    /// Outstanding loan balance
    pub principal: f64,

    /// Nominal annual rate as a percentage (6.5 = 6.5%)
    pub annual_rate_percent: f64,

    /// Original loan length in years
    pub term_years: u32,

    /// Magnitude of the extra payment
    #[serde(default)]
    pub extra_payment_amount: f64,

    /// One-time lump sum or recurring monthly overpayment
    pub extra_payment_mode: ExtraPaymentMode,
}

impl LoanInputs {
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        term_years: u32,
        extra_payment_amount: f64,
        extra_payment_mode: ExtraPaymentMode,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
            extra_payment_amount,
            extra_payment_mode,
        }
    }

    /// Same loan with a different extra payment amount
    pub fn with_extra_payment(&self, amount: f64) -> Self {
        Self {
            extra_payment_amount: amount,
            ..*self
        }
    }

    /// Same loan with a different extra payment mode
    pub fn with_mode(&self, mode: ExtraPaymentMode) -> Self {
        Self {
            extra_payment_mode: mode,
            ..*self
        }
    }

    /// Monthly periodic rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Contractual number of monthly payments
    pub fn total_months(&self) -> u64 {
        u64::from(self.term_years) * 12
    }

    /// Reject inputs the engine would only tolerate as degenerate
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_finite() || self.principal < 0.0 {
            return Err(LoanError::InvalidPrincipal(self.principal));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(LoanError::InvalidRate(self.annual_rate_percent));
        }
        if self.term_years == 0 || self.term_years > MAX_TERM_YEARS {
            return Err(LoanError::InvalidTerm(self.term_years));
        }
        if !self.extra_payment_amount.is_finite() || self.extra_payment_amount < 0.0 {
            return Err(LoanError::InvalidExtraPayment(self.extra_payment_amount));
        }
        Ok(())
    }
}

impl Default for LoanInputs {
    /// Starting values of the calculator form
    fn default() -> Self {
        Self {
            principal: 350_000.0,
            annual_rate_percent: 6.5,
            term_years: 30,
            extra_payment_amount: 500.0,
            extra_payment_mode: ExtraPaymentMode::Monthly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_rates() {
        let loan = LoanInputs::new(300_000.0, 6.0, 30, 0.0, ExtraPaymentMode::OneTime);
        assert_relative_eq!(loan.monthly_rate(), 0.005);
        assert_eq!(loan.total_months(), 360);
    }

    #[test]
    fn test_extra_for_month() {
        assert_eq!(ExtraPaymentMode::OneTime.extra_for_month(1, 100.0), 100.0);
        assert_eq!(ExtraPaymentMode::OneTime.extra_for_month(2, 100.0), 0.0);
        assert_eq!(ExtraPaymentMode::Monthly.extra_for_month(1, 100.0), 100.0);
        assert_eq!(ExtraPaymentMode::Monthly.extra_for_month(240, 100.0), 100.0);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("monthly".parse::<ExtraPaymentMode>().unwrap(), ExtraPaymentMode::Monthly);
        assert_eq!("One-Time".parse::<ExtraPaymentMode>().unwrap(), ExtraPaymentMode::OneTime);
        assert!(matches!(
            "weekly".parse::<ExtraPaymentMode>(),
            Err(LoanError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_validation() {
        assert!(LoanInputs::default().validate().is_ok());

        let zero_term = LoanInputs { term_years: 0, ..Default::default() };
        assert!(matches!(zero_term.validate(), Err(LoanError::InvalidTerm(0))));

        let negative = LoanInputs { principal: -1.0, ..Default::default() };
        assert!(matches!(negative.validate(), Err(LoanError::InvalidPrincipal(_))));

        let nan_rate = LoanInputs { annual_rate_percent: f64::NAN, ..Default::default() };
        assert!(matches!(nan_rate.validate(), Err(LoanError::InvalidRate(_))));

        let negative_extra = LoanInputs { extra_payment_amount: -5.0, ..Default::default() };
        assert!(matches!(negative_extra.validate(), Err(LoanError::InvalidExtraPayment(_))));

        // Zero rate and zero extra are valid
        let zero_rate = LoanInputs { annual_rate_percent: 0.0, extra_payment_amount: 0.0, ..Default::default() };
        assert!(zero_rate.validate().is_ok());
    }

    #[test]
    fn test_term_bound() {
        let longest = LoanInputs { term_years: MAX_TERM_YEARS, ..Default::default() };
        assert!(longest.validate().is_ok());
        assert_eq!(longest.total_months(), 1_200);

        let too_long = LoanInputs { term_years: MAX_TERM_YEARS + 1, ..Default::default() };
        assert!(matches!(too_long.validate(), Err(LoanError::InvalidTerm(101))));

        let absurd = LoanInputs { term_years: 1_000_000_000, ..Default::default() };
        assert!(matches!(absurd.validate(), Err(LoanError::InvalidTerm(1_000_000_000))));
        // Month count stays exact even out of range
        assert_eq!(absurd.total_months(), 12_000_000_000);
    }

    #[test]
    fn test_builders_keep_other_fields() {
        let base = LoanInputs::default();
        let changed = base.with_extra_payment(1_000.0).with_mode(ExtraPaymentMode::OneTime);
        assert_eq!(changed.principal, base.principal);
        assert_eq!(changed.extra_payment_amount, 1_000.0);
        assert_eq!(changed.extra_payment_mode, ExtraPaymentMode::OneTime);
    }
}
