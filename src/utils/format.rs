//! Human-readable rendering of projection values.
//!
//! Numbers follow the ru-RU conventions the calculators are shown with:
//! thousands are grouped with a non-breaking space and amounts carry a
//! rouble suffix. Non-finite values never leak into the output; they are
//! rendered as [`PLACEHOLDER`].

/// Shown in place of a value that cannot be displayed.
pub const PLACEHOLDER: &str = "—";

pub const GROUP_SEPARATOR: char = '\u{a0}';
pub const CURRENCY_SUFFIX: &str = "₽";
pub const MILLIONS_SUFFIX: &str = "млн";
pub const MONTHS_SUFFIX: &str = "мес";

/// Rounds to the nearest integer, ties toward positive infinity.
///
/// `f64::round` sends ties away from zero, which differs for negative
/// halves (`-2.5` becomes `-3` there and `-2` here).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds to one decimal place with the same tie rule as [`round_half_up`].
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole number with grouped thousands, e.g. `1 234 567`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let rounded = round_half_up(value);
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_digits(&digits);

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Amount with currency suffix; millions are shortened to one decimal.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    if value.abs() >= 1_000_000.0 {
        // 以十萬為單位取整，半數一律進位（1.25 → 1.3），再補回正負號
        let tenths = round_half_up(value.abs() / 100_000.0) / 10.0;
        let sign = if value < 0.0 { "-" } else { "" };
        let millions = format!("{}{:.1}", sign, tenths).replacen(".0", "", 1);
        return format!("{} {} {}", millions, MILLIONS_SUFFIX, CURRENCY_SUFFIX);
    }

    format!("{} {}", format_number(value), CURRENCY_SUFFIX)
}

/// Same as [`format_currency`] but a non-positive amount shows the placeholder.
pub fn format_gain(value: f64) -> String {
    if value > 0.0 {
        format_currency(value)
    } else {
        PLACEHOLDER.to_string()
    }
}

pub fn format_percent(value: f64) -> String {
    if value > 0.0 && value.is_finite() {
        format!("{}%", format_number(value))
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Payback period label. An infinite period means the cost is never recouped.
pub fn format_payback(months: f64) -> String {
    if months.is_nan() {
        return PLACEHOLDER.to_string();
    }

    if months < 1.0 {
        format!("< 1 {}", MONTHS_SUFFIX)
    } else if months <= 12.0 {
        format!("{} {}", months.ceil(), MONTHS_SUFFIX)
    } else {
        format!("> 12 {}", MONTHS_SUFFIX)
    }
}

/// Rate or other slider value with at most one decimal.
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let text = format!("{:.1}", round_to_tenth(value));
    text.strip_suffix(".0").map(str::to_string).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_to_tenth(1.25), 1.3);
        assert_eq!(round_to_tenth(2.0), 2.0);
    }

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1_000.0), "1\u{a0}000");
        assert_eq!(format_number(1_234_567.4), "1\u{a0}234\u{a0}567");
        assert_eq!(format_number(-33_200.0), "-33\u{a0}200");
        assert_eq!(format_number(f64::NAN), PLACEHOLDER);
        assert_eq!(format_number(f64::INFINITY), PLACEHOLDER);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(144_000.0), "144\u{a0}000 ₽");
        assert_eq!(format_currency(2_500_000.0), "2.5 млн ₽");
        assert_eq!(format_currency(3_000_000.0), "3 млн ₽");
        assert_eq!(format_currency(-4_000_000.0), "-4 млн ₽");
        assert_eq!(format_currency(f64::NAN), PLACEHOLDER);
    }

    #[test]
    fn test_format_currency_ties_round_up() {
        assert_eq!(format_currency(1_250_000.0), "1.3 млн ₽");
        assert_eq!(format_currency(-1_250_000.0), "-1.3 млн ₽");
        assert_eq!(format_currency(10_250_000.0), "10.3 млн ₽");
        assert_eq!(format_currency(1_240_000.0), "1.2 млн ₽");
    }

    #[test]
    fn test_format_gain_and_percent() {
        assert_eq!(format_gain(-10.0), PLACEHOLDER);
        assert_eq!(format_gain(254_800.0), "254\u{a0}800 ₽");
        assert_eq!(format_percent(767.47), "767%");
        assert_eq!(format_percent(0.0), PLACEHOLDER);
        assert_eq!(format_percent(-12.0), PLACEHOLDER);
    }

    #[test]
    fn test_format_payback() {
        assert_eq!(format_payback(0.115), "< 1 мес");
        assert_eq!(format_payback(3.2), "4 мес");
        assert_eq!(format_payback(12.0), "12 мес");
        assert_eq!(format_payback(12.5), "> 12 мес");
        assert_eq!(format_payback(f64::INFINITY), "> 12 мес");
        assert_eq!(format_payback(f64::NAN), PLACEHOLDER);
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(6.0), "6");
        assert_eq!(format_decimal(6.5), "6.5");
        assert_eq!(format_decimal(f64::NEG_INFINITY), PLACEHOLDER);
    }
}
