//! Result formatting.
//!
//! `format_number` produces the text that becomes the new raw input after an
//! evaluation, so it must lex back to the same value. `format_grouped` is the
//! friendlier variant with thousand separators used by the terminal.

/// Magnitudes at or above this switch to exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitudes below this switch to exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Format a value as raw input text.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        // Also covers negative zero.
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        format!("{}", value)
    } else {
        format_exponent(value)
    }
}

/// `1e21` -> `1e+21`, `1.5e-7` stays as is.
fn format_exponent(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Format a value for display with thousand separators in the integer part.
pub fn format_grouped(value: f64) -> String {
    let plain = format_number(value);
    if !value.is_finite() || plain.contains('e') {
        return plain;
    }

    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, dec_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    format!("{}{}{}", sign, group_digits(int_part), dec_part)
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
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-120.0), "-120");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_shortest_decimal() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(std::f64::consts::PI), "3.141592653589793");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(format_grouped(1_000_000.0), "1,000,000");
        assert_eq!(format_grouped(-1234.5), "-1,234.5");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1e21), "1e+21");
        assert_eq!(format_grouped(f64::INFINITY), "Infinity");
    }
}
