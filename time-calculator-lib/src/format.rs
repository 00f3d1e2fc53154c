use std::fmt;
use std::fmt::Formatter;

const MINUTES_PER_HOUR: f64 = 60.0;

/// How far, in minutes, an exact value may sit from the displayed whole minute
/// before it counts as rounded.
pub const ROUNDING_EPSILON_MINUTES: f64 = 1e-4;

/// A quantity of hours prepared for display as `H:MM`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedHours {
    pub hhmm: String,
    /// Whether `hhmm` shows a value other than the exact one.
    pub is_rounded: bool,
    /// Exact value minus displayed value, in hours. Zero unless rounded.
    pub delta: f64,
}

impl FormattedHours {
    /// The delta with four decimals and an hour suffix, e.g. `0.0008h`.
    pub fn delta_label(&self) -> String {
        format!("{:.4}h", self.delta)
    }
}

impl fmt::Display for FormattedHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hhmm)
    }
}

/// Formats hours as `H:MM`, rounded to the nearest minute.
///
/// The total is rounded to whole minutes before it is split into hours and
/// minutes, so `1.9999` shows as `2:00`. Infinities and `NaN` are shown as
/// `∞`, `-∞` and `NaN`.
///
/// # Arguments
///
/// * `hours`: The exact number of hours, as returned by evaluation.
///
/// returns: The display form together with how much rounding changed it.
///
/// # Examples
///
/// ```
/// use time_calculator::format::format_hours;
///
/// let formatted = format_hours(8.5);
/// assert_eq!(formatted.hhmm, "8:30");
/// assert!(!formatted.is_rounded);
/// ```
pub fn format_hours(hours: f64) -> FormattedHours {
    if !hours.is_finite() {
        return FormattedHours {
            hhmm: format_non_finite(hours).to_string(),
            is_rounded: false,
            delta: 0.0,
        };
    }

    let exact_minutes = hours * MINUTES_PER_HOUR;
    let total_minutes = round_half_up(exact_minutes);
    let whole_hours = (total_minutes.abs() / MINUTES_PER_HOUR).floor();
    let minutes = total_minutes.abs() % MINUTES_PER_HOUR;
    let sign = if hours < 0.0 { "-" } else { "" };

    let difference = exact_minutes - total_minutes;
    let is_rounded = difference.abs() > ROUNDING_EPSILON_MINUTES;

    FormattedHours {
        hhmm: format!("{}{:.0}:{:02.0}", sign, whole_hours, minutes),
        is_rounded,
        delta: if is_rounded {
            difference / MINUTES_PER_HOUR
        } else {
            0.0
        },
    }
}

fn format_non_finite(hours: f64) -> &'static str {
    if hours.is_nan() {
        "NaN"
    } else if hours.is_sign_negative() {
        "-∞"
    } else {
        "∞"
    }
}

// Halves round towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
