//! Nine-day inclusive date window.
//!
//! Every range handed to the remote service is built here, so the
//! `end == start + 8 days` invariant holds for the whole application.

use chrono::{Days, NaiveDate};
use std::fmt;

/// Number of calendar days covered by one window, inclusive.
pub const WINDOW_DAYS: u64 = 9;

/// Wire and display format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Window beginning at `start`. `None` if the end would overflow the calendar.
    pub fn starting_at(start: NaiveDate) -> Option<Self> {
        let end = start.checked_add_days(Days::new(WINDOW_DAYS - 1))?;
        Some(Self { start, end })
    }

    /// Window finishing at `end`. `None` if the start would underflow the calendar.
    pub fn ending_at(end: NaiveDate) -> Option<Self> {
        let start = end.checked_sub_days(Days::new(WINDOW_DAYS - 1))?;
        Some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// `start_date` query value.
    pub fn start_param(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// `end_date` query value.
    pub fn end_param(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    /// Inclusive day count. Always [`WINDOW_DAYS`].
    pub fn len_days(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start_param(), self.end_param())
    }
}

/// Parses a `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Holds the currently chosen window and applies user edits to it.
#[derive(Debug, Clone)]
pub struct DateRangeManager {
    range: DateRange,
}

impl DateRangeManager {
    /// Starts with [`Self::default_range`] for `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            range: Self::default_range(today),
        }
    }

    /// The nine days ending at `today`.
    ///
    /// Falls back to the window starting at `today` for dates at the very
    /// beginning of the calendar, which keeps the span invariant intact.
    pub fn default_range(today: NaiveDate) -> DateRange {
        DateRange::ending_at(today)
            .or_else(|| DateRange::starting_at(today))
            .unwrap_or(DateRange {
                start: NaiveDate::MIN,
                end: NaiveDate::MIN + Days::new(WINDOW_DAYS - 1),
            })
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Replaces the window with one starting at the date in `input`.
    ///
    /// Input that is empty, malformed, or too close to the end of the
    /// calendar leaves the current range untouched.
    pub fn normalize(&mut self, input: &str) -> DateRange {
        match parse_date(input) {
            Some(start) => self.normalize_date(start),
            None => {
                tracing::debug!(input, "ignoring invalid start date");
                self.range
            }
        }
    }

    /// Same as [`Self::normalize`] for an already parsed date.
    pub fn normalize_date(&mut self, start: NaiveDate) -> DateRange {
        match DateRange::starting_at(start) {
            Some(range) => self.range = range,
            None => tracing::debug!(%start, "start date leaves no room for a full window"),
        }
        self.range
    }
}
