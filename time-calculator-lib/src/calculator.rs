use crate::format::{format_hours, FormattedHours};
use crate::history::History;
use crate::interpreter::{evaluate_with, Strictness};
use anyhow::{Error, Result};
use log::{debug, warn};

/// One successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub input: String,
    /// The exact value, before rounding to whole minutes.
    pub hours: f64,
    pub formatted: FormattedHours,
}

/// An hours-and-minutes calculator session that remembers its recent results.
#[derive(Debug, Clone, Default)]
pub struct TimeCalculator {
    strictness: Strictness,
    history: History,
}

impl TimeCalculator {
    pub fn new(strictness: Strictness) -> Self {
        TimeCalculator {
            strictness,
            history: History::new(),
        }
    }

    /// Evaluates the input and records the result in the history.
    ///
    /// A failed evaluation leaves the history as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_calculator::calculator::TimeCalculator;
    /// # use anyhow::Result;
    ///
    /// # fn main() -> Result<()> {
    /// let mut calculator = TimeCalculator::default();
    /// let calculation = calculator.calculate("8:30 + 1:45")?;
    ///
    /// assert_eq!(calculation.formatted.hhmm, "10:15");
    /// assert_eq!(calculator.history().len(), 1);
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn calculate(&mut self, input: &str) -> Result<Calculation> {
        let hours = evaluate_with(input, self.strictness).map_err(|error| {
            warn!("Could not evaluate {:?}: {}", input, error);
            error
        })?;
        let formatted = format_hours(hours);
        if formatted.is_rounded {
            debug!("Rounded {} hours to {}", hours, formatted.hhmm);
        }

        self.history.record(input, &formatted);
        Ok(Calculation {
            input: input.to_string(),
            hours,
            formatted,
        })
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }
}

/// The text shown in place of a result when evaluation fails.
pub fn error_message(error: &Error) -> String {
    format!("Error: {}", error)
}
