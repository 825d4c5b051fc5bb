//! Rendering of evaluation results.

use serde::Deserialize;

/// How a successful result is shown on screen.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResultStyle {
    /// Default floating-point rendering, e.g. `7.0` or `1.0E7`.
    #[default]
    Default,
    /// Thousands separators, trailing zeros trimmed, e.g. `1,000,000`.
    Grouped,
}

impl ResultStyle {
    /// Format a value in this style.
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Default => format_default(value),
            Self::Grouped => format_grouped(value),
        }
    }
}

/// Format a value the way a plain `double` prints by default.
///
/// Ordinary magnitudes always carry a fractional part (`7.0`, `0.25`).
/// Values at or above `1e7`, or below `1e-3`, use scientific notation with
/// an upper-case `E` (`1.0E7`, `2.5E-4`).
pub fn format_default(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return if value.is_sign_negative() {
            "-0.0".to_string()
        } else {
            "0.0".to_string()
        };
    }

    let magnitude = value.abs();
    if (1e-3..1e7).contains(&magnitude) {
        let mut s = format!("{}", value);
        if !s.contains('.') {
            s.push_str(".0");
        }
        return s;
    }

    let s = format!("{:e}", value);
    match s.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => s,
    }
}

/// Format a number for display with thousand separators.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return format_default(value);
    }

    let formatted = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value.abs() as i64)
    } else {
        let s = format!("{:.10}", value.abs());
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    };

    let (int_part, dec_part) = match formatted.find('.') {
        Some(dot_pos) => formatted.split_at(dot_pos),
        None => (formatted.as_str(), ""),
    };

    let grouped = group_digits(int_part);
    if value < 0.0 && (grouped != "0" || !dec_part.is_empty()) {
        format!("-{grouped}{dec_part}")
    } else {
        format!("{grouped}{dec_part}")
    }
}

/// Insert a comma every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_fraction() {
        assert_eq!(format_default(7.0), "7.0");
        assert_eq!(format_default(-3.25), "-3.25");
        assert_eq!(format_default(0.5), "0.5");
        assert_eq!(format_default(1234567.0), "1234567.0");
        assert_eq!(format_default(0.001), "0.001");
    }

    #[test]
    fn test_default_zero() {
        assert_eq!(format_default(0.0), "0.0");
        assert_eq!(format_default(-0.0), "-0.0");
    }

    #[test]
    fn test_default_scientific() {
        assert_eq!(format_default(1e7), "1.0E7");
        assert_eq!(format_default(12345678.0), "1.2345678E7");
        assert_eq!(format_default(0.00025), "2.5E-4");
        assert_eq!(format_default(-1e10), "-1.0E10");
    }

    #[test]
    fn test_default_special_values() {
        assert_eq!(format_default(f64::INFINITY), "Infinity");
        assert_eq!(format_default(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_default(f64::NAN), "NaN");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(format_grouped(4.0), "4");
        assert_eq!(format_grouped(1_000_000.0), "1,000,000");
        assert_eq!(format_grouped(-1234.5), "-1,234.5");
        assert_eq!(format_grouped(-0.5), "-0.5");
        assert!(format_grouped(1.0 / 3.0).starts_with("0.333"));
        assert_eq!(format_grouped(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_style_dispatch() {
        assert_eq!(ResultStyle::Default.format(12.0), "12.0");
        assert_eq!(ResultStyle::Grouped.format(12.0), "12");
    }
}
