//! Currency display helpers (en-US conventions)
//!
//! Used by the CLI and Lambda surfaces only; the engine works in plain numbers.

/// Currency shown when the caller does not choose one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Display symbol for an ISO 4217 code, falling back to the code itself
pub fn currency_symbol(code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    let symbol = match code.as_str() {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "INR" => "₹",
        "KRW" => "₩",
        "ILS" => "₪",
        "VND" => "₫",
        "PHP" => "₱",
        "NGN" => "₦",
        "BRL" => "R$",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "MXN" => "MX$",
        "HKD" => "HK$",
        "TWD" => "NT$",
        _ => return code,
    };
    symbol.to_string()
}

/// Format `value` as currency with `decimals` fraction digits, e.g. `$1,896.20`
pub fn format_currency(value: f64, code: &str, decimals: usize) -> String {
    let symbol = currency_symbol(code);
    // Alphabetic symbols (CHF, SEK, unknown codes) are separated from the amount
    let separator = if symbol.chars().all(|c| c.is_ascii_alphabetic()) { " " } else { "" };

    if !value.is_finite() {
        return format!("{}{}{}", symbol, separator, value);
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let grouped = group_thousands(int_part);
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{}{}{}{}.{}", sign, symbol, separator, grouped, frac),
        None => format!("{}{}{}{}", sign, symbol, separator, grouped),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
