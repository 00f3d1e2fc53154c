const MINUTES_PER_HOUR: f64 = 60.0;

/// Characters that can make up a numeric literal.
pub fn is_literal_char(character: char) -> bool {
    character.is_ascii_digit() || character == '.' || character == ':'
}

/// Converts one run of literal characters into a quantity of hours.
///
/// A run containing `:` is read as `HH:MM` and becomes `HH + MM / 60`,
/// anything else is read as a decimal number. A run that is neither
/// evaluates to `NaN`, which then propagates through the arithmetic.
/// Both sides of the first `:` must be plain digits, so a seconds part
/// such as `1:30:00` or a fractional one such as `8:3.0` is `NaN` too.
///
/// # Arguments
///
/// * `text`: A maximal run of digits, `.` and `:`.
///
/// returns: The value of the literal in hours.
///
/// # Examples
///
/// ```
/// use time_calculator::interpreter::literal::parse_literal;
///
/// assert_eq!(parse_literal("8:30"), 8.5);
/// assert_eq!(parse_literal("1.25"), 1.25);
/// assert!(parse_literal("1.2.3").is_nan());
/// ```
pub fn parse_literal(text: &str) -> f64 {
    match text.split_once(':') {
        Some((hours, minutes)) => parse_time(hours, minutes),
        None => parse_decimal(text),
    }
}

/// Whether the given run converts to a real number rather than `NaN`.
pub fn is_valid_literal(text: &str) -> bool {
    !parse_literal(text).is_nan()
}

fn parse_time(hours: &str, minutes: &str) -> f64 {
    match (parse_time_component(hours), parse_time_component(minutes)) {
        (Some(hours), Some(minutes)) => hours + minutes / MINUTES_PER_HOUR,
        _ => f64::NAN,
    }
}

// An empty side counts as zero, so ":45" is three quarters of an hour.
fn parse_time_component(text: &str) -> Option<f64> {
    if text.is_empty() {
        return Some(0.0);
    }
    if !text.chars().all(|character| character.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok()
}

fn parse_decimal(text: &str) -> f64 {
    if text.matches('.').count() > 1 {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    text = {
    "8:30",
    "1:45",
    "0:15",
    "1:90",
    ":45",
    "2:",
    "08:06",
    },
    expected_hours = {
    8.5,
    1.75,
    0.25,
    2.5,
    0.75,
    2.0,
    8.1,
    }
    )]
    fn time_literal_converts_to_fractional_hours(text: &str, expected_hours: f64) {
        let actual = parse_literal(text);
        assert!(
            (actual - expected_hours).abs() < 1e-12,
            "{} parsed as {}",
            text,
            actual
        );
    }

    #[parameterized(
    text = { "42", "2036", "1.5", "5.", ".5", "007" },
    expected_hours = { 42.0, 2036.0, 1.5, 5.0, 0.5, 7.0 }
    )]
    fn decimal_literal_converts_to_hours(text: &str, expected_hours: f64) {
        assert_eq!(parse_literal(text), expected_hours);
    }

    #[parameterized(text = { "1.2.3", ".", "..", "1:30:00", "1.5:30", "8:3.0", "::" })]
    fn malformed_literal_is_nan(text: &str) {
        assert!(parse_literal(text).is_nan());
        assert!(!is_valid_literal(text));
    }

    #[test]
    fn literal_chars_are_digits_dots_and_colons() {
        assert!("0123456789.:".chars().all(is_literal_char));
        assert!(!"+-*/() x,".chars().any(is_literal_char));
    }
}
