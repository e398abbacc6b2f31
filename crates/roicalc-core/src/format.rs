//! Display formatting for derived values.

/// Fixed-point rendering of the exact binary value.
///
/// Rounds to the nearest `decimals`-place decimal; only a value lying exactly
/// halfway between two outputs rounds away from zero. `1.15` is stored just
/// below 1.15 and renders as `"1.1"`, while `1.25` is a true tie and renders
/// as `"1.3"`.
#[allow(clippy::float_cmp)]
fn to_fixed(value: f64, decimals: u32) -> String {
    let precision = decimals as usize;
    let scale = f64::from(10u32.pow(decimals));
    let magnitude = value.abs();
    let lower = (magnitude * scale).floor();
    let half = lower + 0.5;
    // Exact product check: a single rounding leaves zero only on a true tie.
    if magnitude.mul_add(scale, -half) == 0.0 {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{:.precision$}", (lower + 1.0) / scale);
    }
    format!("{value:.precision$}")
}

/// Abbreviate a dollar amount: `$X.YM`, `$XK`, or `$X`.
///
/// # Example
/// ```
/// use roicalc_core::format::format_money;
///
/// assert_eq!(format_money(8_100_000.0), "$8.1M");
/// assert_eq!(format_money(2_340.0), "$2K");
/// assert_eq!(format_money(500.0), "$500");
/// ```
#[must_use]
pub fn format_money(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("${}M", to_fixed(n / 1_000_000.0, 1))
    } else if n >= 1_000.0 {
        format!("${}K", to_fixed(n / 1_000.0, 0))
    } else {
        format!("${n}")
    }
}

/// Format an integer with thousand separators.
#[must_use]
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Format a percentage with an explicit `+` when positive.
#[must_use]
pub fn format_signed_percent(n: i64) -> String {
    let sign = if n > 0 { "+" } else { "" };
    format!("{sign}{}%", format_number(n))
}

/// Format a dollar amount with cents and thousand separators, e.g. `$1,872.00`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = i64::try_from(cents / 100).unwrap_or(i64::MAX);
    format!("{sign}${}.{:02}", format_number(dollars), cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roi::{derive_roi, RoiCalculator, RoiInputs};

    #[test]
    fn money_millions() {
        assert_eq!(format_money(8_100_000.0), "$8.1M");
        assert_eq!(format_money(1_000_000.0), "$1.0M");
        assert_eq!(format_money(12_345_678.0), "$12.3M");
    }

    #[test]
    fn money_thousands() {
        assert_eq!(format_money(2_340.0), "$2K");
        assert_eq!(format_money(1_000.0), "$1K");
        assert_eq!(format_money(2_500.0), "$3K");
        assert_eq!(format_money(999_999.0), "$1000K");
    }

    #[test]
    fn money_small() {
        assert_eq!(format_money(500.0), "$500");
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(12.5), "$12.5");
    }

    #[test]
    fn money_half_rounds_away_from_zero() {
        assert_eq!(format_money(1_250_000.0), "$1.3M");
        assert_eq!(format_money(2_500.0), "$3K");
        assert_eq!(format_money(3_500.0), "$4K");
    }

    #[test]
    fn money_rounds_stored_binary_value() {
        assert_eq!(format_money(1_150_000.0), "$1.1M");
        assert_eq!(format_money(4_350_000.0), "$4.3M");
        assert_eq!(format_money(1_450_000.0), "$1.4M");
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn money_from_reachable_revenue() {
        let inputs = RoiInputs {
            monthly_traffic: 7_100,
            ..RoiCalculator::default().inputs()
        };
        let breakdown = derive_roi(&inputs);
        assert_eq!(breakdown.revenue_impact, 1_150_000);
        assert_eq!(format_money(breakdown.revenue_impact as f64), "$1.1M");
    }

    #[test]
    fn fixed_point_ties_and_signs() {
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(-0.5, 0), "-1");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(2.675, 2), "2.67");
        assert_eq!(to_fixed(12.345_678, 1), "12.3");
    }

    #[test]
    fn number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(-97), "-97");
        assert_eq!(format_number(-12_345), "-12,345");
    }

    #[test]
    fn signed_percent() {
        assert_eq!(format_signed_percent(346_054), "+346,054%");
        assert_eq!(format_signed_percent(0), "0%");
        assert_eq!(format_signed_percent(-97), "-97%");
    }

    #[test]
    fn currency_cents_and_separators() {
        assert_eq!(format_currency(1872.0), "$1,872.00");
        assert_eq!(format_currency(31.2), "$31.20");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-5.5), "-$5.50");
    }
}
