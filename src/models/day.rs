use crate::utils::date::midnight;
use chrono::{NaiveDate, NaiveDateTime};

/// One ledger day: first and last clock event of a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub comment: String,
}

impl Day {
    /// First observation of a date: start and end coincide.
    pub fn observed(ts: NaiveDateTime, comment: impl Into<String>) -> Self {
        Self {
            date: ts.date(),
            start: ts,
            end: ts,
            comment: comment.into(),
        }
    }

    /// Zero-duration stand-in for a date without any record.
    pub fn placeholder(date: NaiveDate) -> Self {
        Self::observed(midnight(date), "")
    }

    /// Later observation of the same date moves the end.
    pub fn record(&mut self, ts: NaiveDateTime) {
        self.end = ts;
    }
}
