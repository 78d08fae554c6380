//! Classification of declarative width hints.

use crate::types::Length;

/// A width hint after classification
#[derive(Debug, Clone, PartialEq)]
pub enum WidthHint {
    /// CSS measure applied verbatim, e.g. `120px`, `7.5em` or `calc(100% - 2px)`
    Absolute(Length),
    /// Relative weight; 0 means "no preference"
    Weight(f64),
}

impl WidthHint {
    /// Classify a hint string. Never fails.
    ///
    /// A hint with letters and at least one digit is an absolute measure.
    /// Letters without a digit (`abc`, `auto`) cannot be resolved and
    /// become weight 0, as does anything without a leading number.
    pub fn parse(hint: &str) -> Self {
        if hint.chars().any(char::is_alphabetic) {
            if hint.chars().any(|c| c.is_ascii_digit()) {
                return WidthHint::Absolute(Length::new(normalize_measure(hint.trim())));
            }
            tracing::debug!(hint, "unresolvable width hint, using weight 0");
            return WidthHint::Weight(0.0);
        }

        match parse_float_prefix(hint) {
            Some(weight) => WidthHint::Weight(weight),
            None => {
                if !hint.trim().is_empty() {
                    tracing::debug!(hint, "unparseable width weight, using weight 0");
                }
                WidthHint::Weight(0.0)
            }
        }
    }

    /// Classify an optional hint; a missing hint is weight 0
    pub fn resolve(hint: Option<&str>) -> Self {
        hint.map_or(WidthHint::Weight(0.0), WidthHint::parse)
    }
}

/// Join `<number> <unit>` into `<number><unit>`; anything else is kept as is.
fn normalize_measure(measure: &str) -> String {
    let number_len = float_prefix_len(measure);
    let (Some(number), Some(rest)) = (measure.get(..number_len), measure.get(number_len..)) else {
        return measure.to_string();
    };
    let unit = rest.trim_start();
    if number_len > 0
        && unit.len() < rest.len()
        && !unit.is_empty()
        && unit.chars().all(|c| c.is_ascii_alphabetic())
    {
        format!("{number}{unit}")
    } else {
        measure.to_string()
    }
}

/// Length in bytes of the leading decimal number (sign, digits, one dot).
/// Returns 0 when there is no digit.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut digits = 0;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    while let Some(&b) = bytes.get(end) {
        if b.is_ascii_digit() {
            digits += 1;
        } else if b == b'.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
        end += 1;
    }

    if digits == 0 {
        0
    } else {
        end
    }
}

/// Parse the leading number of a string, ignoring leading whitespace and
/// any trailing garbage (`"1.5"`, `" 2"`, `"50%"`, `"1.5.2"`).
fn parse_float_prefix(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let len = float_prefix_len(trimmed);
    if len == 0 {
        return None;
    }
    let number = trimmed.get(..len)?;
    let number = number.strip_suffix('.').unwrap_or(number);
    number.parse::<f64>().ok().filter(|w| w.is_finite())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("120px", "120px" ; "pixels")]
    #[test_case("7.5em", "7.5em" ; "fractional em")]
    #[test_case(" 92px ", "92px" ; "surrounding whitespace")]
    #[test_case("12 rem", "12rem" ; "space before unit is dropped")]
    #[test_case("1e3", "1e3" ; "exponent")]
    #[test_case("px120", "px120" ; "unit first")]
    #[test_case("calc(100% - 2px)", "calc(100% - 2px)" ; "css function kept verbatim")]
    #[test_case("  calc(50% + 1em) ", "calc(50% + 1em)" ; "css function trimmed")]
    fn test_absolute(hint: &str, expected: &str) {
        assert_eq!(WidthHint::parse(hint), WidthHint::Absolute(Length::new(expected)));
    }

    #[test_case("1", 1.0 ; "integer weight")]
    #[test_case("1.5", 1.5 ; "fractional weight")]
    #[test_case(" 2", 2.0 ; "leading whitespace")]
    #[test_case(".5", 0.5 ; "leading dot")]
    #[test_case("3.", 3.0 ; "trailing dot")]
    #[test_case("50%", 50.0 ; "percent sign is ignored")]
    #[test_case("1.5.2", 1.5 ; "second dot ends the number")]
    #[test_case("-2", -2.0 ; "negative weight")]
    fn test_weight(hint: &str, expected: f64) {
        assert_eq!(WidthHint::parse(hint), WidthHint::Weight(expected));
    }

    #[test_case("abc" ; "letters only")]
    #[test_case("" ; "empty")]
    #[test_case("   " ; "blank")]
    #[test_case("%" ; "symbol only")]
    #[test_case("auto" ; "keyword without digits")]
    #[test_case("fit-content" ; "hyphenated keyword")]
    #[test_case("-" ; "bare sign")]
    fn test_degrades_to_zero(hint: &str) {
        assert_eq!(WidthHint::parse(hint), WidthHint::Weight(0.0));
    }

    #[test]
    fn test_missing_hint() {
        assert_eq!(WidthHint::resolve(None), WidthHint::Weight(0.0));
        assert_eq!(WidthHint::resolve(Some("2")), WidthHint::Weight(2.0));
    }
}
