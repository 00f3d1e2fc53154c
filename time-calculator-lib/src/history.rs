use crate::format::FormattedHours;
use std::collections::VecDeque;

pub const HISTORY_CAPACITY: usize = 10;

/// The most recent results, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `"<input> = <H:MM>"` as the newest entry, forgetting the oldest
    /// once more than [`HISTORY_CAPACITY`] are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_calculator::format::format_hours;
    /// use time_calculator::history::History;
    ///
    /// let mut history = History::new();
    /// history.record("8:30 + 1:45", &format_hours(10.25));
    ///
    /// assert_eq!(history.entries().next(), Some("8:30 + 1:45 = 10:15"));
    /// ```
    pub fn record(&mut self, input: &str, formatted: &FormattedHours) {
        self.entries
            .push_front(format!("{} = {}", input, formatted.hhmm));
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
