use crate::models::day_kind::DayKind;
use crate::utils::time::{DurationFormat, format_timestamp};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Accounting result of one calendar day, rendered as two ledger lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub kind: DayKind,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub comment: String,
    pub worktime: Duration,
    pub overtime: Duration,
    /// Only set on Fridays.
    pub week_sum: Option<Duration>,
    pub overtime_total: Duration,
}

impl DayEntry {
    /// `<start>;;;<comment>;`
    pub fn start_record(&self) -> Vec<String> {
        vec![
            format_timestamp(&self.start),
            String::new(),
            String::new(),
            self.comment.clone(),
            String::new(),
        ]
    }

    /// `<end>;<worktime>;<week>;;<overtime>;<overtime total>`
    pub fn end_record(&self, fmt: DurationFormat) -> Vec<String> {
        vec![
            format_timestamp(&self.end),
            fmt.format(self.worktime),
            self.week_sum.map(|w| fmt.format(w)).unwrap_or_default(),
            String::new(),
            fmt.format(self.overtime),
            fmt.format(self.overtime_total),
        ]
    }

    pub fn records(&self, fmt: DurationFormat) -> [Vec<String>; 2] {
        [self.start_record(), self.end_record(fmt)]
    }
}
