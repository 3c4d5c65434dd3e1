//! Label sanitizing and value casting for scraped stat text
//!
//! Career pages render every stat as text: plain and grouped integers,
//! floats, percentages, clock durations (`12:34`) and worded durations
//! (`2 hours`). These helpers turn that text into [`StatValue`]s.

use crate::types::StatValue;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Normalizes a stat or hero label into a mapping key
///
/// Trims, replaces `" - "` and whitespace runs with `_`, lowercases.
///
/// # Example
/// ```
/// use owstats_core::cast::sanitize_label;
/// assert_eq!(sanitize_label(" Eliminations - Most in Game "), "eliminations_most_in_game");
/// ```
pub fn sanitize_label(text: &str) -> String {
    text.trim()
        .replace(" - ", "_")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Casts raw stat text into a typed value
///
/// First match wins:
/// 1. `.` and `,` present: grouped float
/// 2. `.` present: float
/// 3. `:` present or several words: duration, see [`to_millis`]
/// 4. otherwise: grouped integer
///
/// Returns `None` when no number can be read.
pub fn cast_value(text: &str) -> Option<StatValue> {
    let text = text.trim();

    if text.contains('.') && text.contains(',') {
        return leading_float(&text.replace(',', "")).map(StatValue::Float);
    }
    if text.contains('.') {
        return leading_float(text).map(StatValue::Float);
    }
    if text.contains(':') || text.split_whitespace().count() > 1 {
        return to_millis(text);
    }
    leading_int(&text.replace(',', "")).map(StatValue::Integer)
}

/// Decodes duration text into milliseconds
///
/// Clock text is read right to left as seconds, minutes, hours, days.
/// Worded text (`3 hours`) multiplies the leading number by its unit;
/// text without a unit is returned as a plain integer.
///
/// Returns `None` when the duration does not fit in an `i64`.
pub fn to_millis(text: &str) -> Option<StatValue> {
    let text = text.trim();

    if text.contains(':') {
        let factors = [SECOND_MS, MINUTE_MS, HOUR_MS, DAY_MS];
        let mut total = 0i64;
        for (part, factor) in text.rsplit(':').zip(factors) {
            let millis = leading_int(part).unwrap_or(0).checked_mul(factor)?;
            total = total.checked_add(millis)?;
        }
        return Some(StatValue::Millis(total));
    }

    let singular = text.strip_suffix('s').unwrap_or(text);
    let units = [
        ("second", SECOND_MS),
        ("minute", MINUTE_MS),
        ("hour", HOUR_MS),
        ("day", DAY_MS),
    ];
    for (unit, factor) in units {
        if singular.ends_with(unit) {
            return leading_int(singular)
                .and_then(|n| n.checked_mul(factor))
                .map(StatValue::Millis);
        }
    }

    leading_int(singular).map(StatValue::Integer)
}

/// Reads the leading integer of `text`, ignoring anything after it
fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Reads the leading decimal number of `text`, ignoring anything after it
fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in text.char_indices() {
        match c {
            '-' | '+' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            c if c.is_ascii_digit() => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }
    text[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_label() {
        assert_eq!(sanitize_label("All Heroes"), "all_heroes");
        assert_eq!(sanitize_label("  Time Played  "), "time_played");
        assert_eq!(sanitize_label("Damage Done - Avg per 10 Min"), "damage_done_avg_per_10_min");
        assert_eq!(sanitize_label("Games\tWon"), "games_won");
    }

    #[test]
    fn test_cast_grouped_float() {
        assert_eq!(cast_value("1,234.5"), Some(StatValue::Float(1234.5)));
        assert_eq!(cast_value("1,234,567.25"), Some(StatValue::Float(1_234_567.25)));
    }

    #[test]
    fn test_cast_float() {
        assert_eq!(cast_value("2.75"), Some(StatValue::Float(2.75)));
    }

    #[test]
    fn test_cast_integer() {
        assert_eq!(cast_value("42"), Some(StatValue::Integer(42)));
        assert_eq!(cast_value(" 12,345 "), Some(StatValue::Integer(12345)));
    }

    #[test]
    fn test_cast_percentage() {
        assert_eq!(cast_value("45%"), Some(StatValue::Integer(45)));
    }

    #[test]
    fn test_cast_clock_duration() {
        assert_eq!(cast_value("1:30"), Some(StatValue::Millis(90_000)));
        assert_eq!(cast_value("01:02:03"), Some(StatValue::Millis(3_723_000)));
        assert_eq!(cast_value("1:00:00:00"), Some(StatValue::Millis(DAY_MS)));
    }

    #[test]
    fn test_cast_worded_duration() {
        assert_eq!(cast_value("2 minutes"), Some(StatValue::Millis(120_000)));
        assert_eq!(cast_value("1 second"), Some(StatValue::Millis(1_000)));
        assert_eq!(cast_value("3 hours"), Some(StatValue::Millis(3 * HOUR_MS)));
        assert_eq!(cast_value("2 days"), Some(StatValue::Millis(2 * DAY_MS)));
    }

    #[test]
    fn test_cast_multi_word_without_unit() {
        // several words always take the duration path
        assert_eq!(cast_value("12 kills"), Some(StatValue::Integer(12)));
    }

    #[test]
    fn test_cast_non_numeric() {
        assert_eq!(cast_value(""), None);
        assert_eq!(cast_value("--"), None);
        assert_eq!(cast_value("Ana"), None);
    }

    #[test]
    fn test_cast_duration_overflow() {
        assert_eq!(cast_value("999999999999999:00:00:00"), None);
        assert_eq!(cast_value("999999999999999 days"), None);
        assert_eq!(cast_value("9223372036854775:59:59"), None);
    }

    #[test]
    fn test_to_millis_unitless() {
        assert_eq!(to_millis("15"), Some(StatValue::Integer(15)));
    }

    #[test]
    fn test_leading_numbers() {
        assert_eq!(leading_int("12abc"), Some(12));
        assert_eq!(leading_int("-7"), Some(-7));
        assert_eq!(leading_int("abc"), None);
        assert_eq!(leading_float("0.5%"), Some(0.5));
        assert_eq!(leading_float("abc"), None);
    }

    proptest! {
        #[test]
        fn prop_grouped_integers_cast_back(n in 0i64..10_000_000_000) {
            let digits = n.to_string();
            let mut grouped = String::new();
            for (i, c) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    grouped.push(',');
                }
                grouped.push(c);
            }
            prop_assert_eq!(cast_value(&grouped), Some(StatValue::Integer(n)));
        }

        #[test]
        fn prop_clock_durations(m in 0i64..60, s in 0i64..60) {
            let text = format!("{}:{:02}", m, s);
            prop_assert_eq!(cast_value(&text), Some(StatValue::Millis(m * MINUTE_MS + s * SECOND_MS)));
        }

        #[test]
        fn prop_sanitize_is_idempotent(label in "[A-Za-z0-9 -]{0,30}") {
            let once = sanitize_label(&label);
            prop_assert_eq!(sanitize_label(&once), once.clone());
            prop_assert!(!once.contains(char::is_whitespace));
        }
    }
}
