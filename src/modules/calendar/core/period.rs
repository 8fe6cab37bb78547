use chrono::{Datelike, NaiveDate};

/// Range covered by a calendar query, anchored on a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    /// ISO-8601 week: Monday start, grouped by ISO year and week number.
    Week,
    Month,
}

impl Period {
    pub fn contains(self, anchor: NaiveDate, date: NaiveDate) -> bool {
        match self {
            Period::Day => date == anchor,
            Period::Week => date.iso_week() == anchor.iso_week(),
            Period::Month => date.year() == anchor.year() && date.month() == anchor.month(),
        }
    }
}
