//! Fixed-rate level payment calculation

/// Level monthly payment that retires `principal` over `total_months` at `monthly_rate`.
///
/// Standard annuity formula: P * r * (1+r)^n / ((1+r)^n - 1).
/// A zero rate falls back to straight-line principal (P / n) since the
/// formula is 0/0 there. A zero-length term has no payment.
pub fn level_payment(principal: f64, monthly_rate: f64, total_months: u32) -> f64 {
    if total_months == 0 {
        return 0.0;
    }

    let n = total_months as f64;
    if monthly_rate == 0.0 {
        return principal / n;
    }

    let growth = (1.0 + monthly_rate).powf(n);
    let denominator = growth - 1.0;

    // Rates small enough to underflow the growth factor behave like zero rate
    if denominator == 0.0 || !denominator.is_finite() {
        return principal / n;
    }

    principal * monthly_rate * growth / denominator
}
