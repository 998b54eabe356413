//! Text edits on the raw input and display expression.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The number at the end of a string with its optional sign.
    /// The sign only counts when it is not a binary minus, i.e. when it sits
    /// at the start or after an operator or opening parenthesis.
    static ref TRAILING_NUMBER: Regex = Regex::new(
        r"(^|[^\d.)])(-?)(\d*\.?\d+(?:e[+-]?\d+)?|Infinity)$"
    ).unwrap();
}

/// The run of digits and decimal points the cursor is currently in.
pub fn active_number(text: &str) -> &str {
    let start = text
        .char_indices()
        .rev()
        .take_while(|&(_, c)| c.is_ascii_digit() || c == '.')
        .last()
        .map_or(text.len(), |(i, _)| i);
    &text[start..]
}

/// Negate the trailing number of `text`.
///
/// Returns `None` when the text does not end in a number.
pub fn toggle_trailing_sign(text: &str) -> Option<String> {
    let caps = TRAILING_NUMBER.captures(text)?;
    let whole = caps.get(0)?;
    let prefix = caps.get(1).map_or("", |m| m.as_str());
    let negative = caps.get(2).is_some_and(|m| !m.as_str().is_empty());
    let number = caps.get(3).map_or("", |m| m.as_str());

    let sign = if negative { "" } else { "-" };
    Some(format!(
        "{}{}{}{}",
        &text[..whole.start()],
        prefix,
        sign,
        number
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_number() {
        assert_eq!(active_number("12+3.5"), "3.5");
        assert_eq!(active_number("12+"), "");
        assert_eq!(active_number("0"), "0");
        assert_eq!(active_number(""), "");
        assert_eq!(active_number("√(9)"), "");
    }

    #[test]
    fn test_toggle_plain_number() {
        assert_eq!(toggle_trailing_sign("12").as_deref(), Some("-12"));
        assert_eq!(toggle_trailing_sign("-12").as_deref(), Some("12"));
        assert_eq!(toggle_trailing_sign("0.5").as_deref(), Some("-0.5"));
        assert_eq!(toggle_trailing_sign("1e+21").as_deref(), Some("-1e+21"));
        assert_eq!(toggle_trailing_sign("Infinity").as_deref(), Some("-Infinity"));
    }

    #[test]
    fn test_toggle_after_operator() {
        assert_eq!(toggle_trailing_sign("5-3").as_deref(), Some("5--3"));
        assert_eq!(toggle_trailing_sign("5--3").as_deref(), Some("5-3"));
        assert_eq!(toggle_trailing_sign("2*-3").as_deref(), Some("2*3"));
        assert_eq!(toggle_trailing_sign("(4").as_deref(), Some("(-4"));
        assert_eq!(toggle_trailing_sign("10mod3").as_deref(), Some("10mod-3"));
        assert_eq!(
            toggle_trailing_sign("2+3 = 5").as_deref(),
            Some("2+3 = -5")
        );
    }

    #[test]
    fn test_toggle_without_number() {
        assert_eq!(toggle_trailing_sign("(2+3)"), None);
        assert_eq!(toggle_trailing_sign("2+"), None);
        assert_eq!(toggle_trailing_sign(""), None);
    }
}
