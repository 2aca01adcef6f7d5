//! Presentation aggregates derived from an amortization result
//!
//! Spreads the interest saved over the contractual term (per day, week,
//! month, year) and breaks months saved into years and months.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amortization::AmortizationResult;

/// Average days per year used to spread savings per day
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Weeks per year used to spread savings per week
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Interest saved, spread evenly over the original loan term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodicSavings {
    pub day: f64,
    pub week: f64,
    pub month: f64,
    pub year: f64,
    pub total: f64,
}

impl PeriodicSavings {
    /// Spread `result.total_savings` over `term_years`
    pub fn from_result(result: &AmortizationResult, term_years: u32) -> Self {
        let total = result.total_savings;
        if term_years == 0 {
            return Self {
                day: 0.0,
                week: 0.0,
                month: 0.0,
                year: 0.0,
                total,
            };
        }

        let term = term_years as f64;
        Self {
            day: total / (term * DAYS_PER_YEAR),
            week: total / (term * WEEKS_PER_YEAR),
            month: total / (term * 12.0),
            year: total / term,
            total,
        }
    }
}

/// Months saved expressed as whole years plus remaining months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSaved {
    pub years: u32,
    pub months: u32,
}

impl TimeSaved {
    pub fn from_months(months_saved: u32) -> Self {
        Self {
            years: months_saved / 12,
            months: months_saved % 12,
        }
    }
}

impl fmt::Display for TimeSaved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years and {} months", self.years, self.months)
    }
}

/// Date of the last accelerated payment, given the date of the first one.
///
/// `None` when no payments are made or the date is out of range.
pub fn payoff_date(first_payment: NaiveDate, result: &AmortizationResult) -> Option<NaiveDate> {
    let last_offset = result.months_to_payoff.checked_sub(1)?;
    first_payment.checked_add_months(Months::new(last_offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::compute;
    use crate::loan::{ExtraPaymentMode, LoanInputs};
    use approx::assert_relative_eq;

    #[test]
    fn test_periodic_savings() {
        let loan = LoanInputs::new(350_000.0, 6.5, 30, 500.0, ExtraPaymentMode::Monthly);
        let result = compute(&loan);
        let savings = PeriodicSavings::from_result(&result, loan.term_years);

        assert_relative_eq!(savings.total, result.total_savings);
        assert_relative_eq!(savings.year, result.total_savings / 30.0);
        assert_relative_eq!(savings.month, result.total_savings / 360.0);
        assert_relative_eq!(savings.week, result.total_savings / 1560.0);
        assert_relative_eq!(savings.day, result.total_savings / (30.0 * 365.25));
        assert!(savings.day < savings.week && savings.week < savings.month);
    }

    #[test]
    fn test_periodic_savings_zero_term() {
        let loan = LoanInputs::new(1_000.0, 5.0, 0, 0.0, ExtraPaymentMode::Monthly);
        let result = compute(&loan);
        let savings = PeriodicSavings::from_result(&result, 0);
        assert_eq!(savings.day, 0.0);
        assert_eq!(savings.year, 0.0);
    }

    #[test]
    fn test_time_saved() {
        let saved = TimeSaved::from_months(138);
        assert_eq!(saved, TimeSaved { years: 11, months: 6 });
        assert_eq!(saved.to_string(), "11 years and 6 months");
        assert_eq!(TimeSaved::from_months(0).to_string(), "0 years and 0 months");
    }

    #[test]
    fn test_payoff_date() {
        let loan = LoanInputs::new(120_000.0, 0.0, 10, 1_000.0, ExtraPaymentMode::Monthly);
        let result = compute(&loan);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        // 60 months of double payments, the last one in December 2029
        assert_eq!(result.months_to_payoff, 60);
        assert_eq!(payoff_date(start, &result), NaiveDate::from_ymd_opt(2029, 12, 1));
    }

    #[test]
    fn test_payoff_date_is_last_payment() {
        let loan = LoanInputs::new(12_000.0, 0.0, 1, 0.0, ExtraPaymentMode::Monthly);
        let result = compute(&loan);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        // Twelve payments from January land the last one in December
        assert_eq!(result.months_to_payoff, 12);
        assert_eq!(payoff_date(start, &result), NaiveDate::from_ymd_opt(2025, 12, 1));
    }

    #[test]
    fn test_payoff_date_without_payments() {
        let loan = LoanInputs::new(12_000.0, 5.0, 0, 0.0, ExtraPaymentMode::Monthly);
        let result = compute(&loan);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(payoff_date(start, &result), None);
    }
}
