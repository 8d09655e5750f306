//! USDC amounts and their dollar display.
//!
//! Salaries travel as integers in smallest units (10^6 per USDC); every
//! other amount the backend returns is already a USDC decimal.

/// Smallest units per USDC.
pub const USDC_SCALE: u64 = 1_000_000;

/// Units per cent, used to round smallest units to two decimals.
const UNITS_PER_CENT: u64 = USDC_SCALE / 100;

/// Convert a USDC decimal to smallest units, rounding to the nearest unit.
///
/// Returns `None` for negative or non-finite input and for amounts too
/// large to fit in a `u64` once scaled.
pub fn usdc_to_units(amount: f64) -> Option<u64> {
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    let units = (amount * USDC_SCALE as f64).round();
    (units < u64::MAX as f64).then_some(units as u64)
}

/// Convert smallest units to a USDC decimal.
pub fn units_to_usdc(units: u64) -> f64 {
    units as f64 / USDC_SCALE as f64
}

/// Format a USDC decimal as `$1,234.56`.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format_cents(sign, cents)
}

/// Format smallest units as dollars without going through floating point.
pub fn format_units(units: u64) -> String {
    let cents = (units + UNITS_PER_CENT / 2) / UNITS_PER_CENT;
    format_cents("", cents)
}

/// Format a margin as `12.34%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn format_cents(sign: &str, cents: u64) -> String {
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
