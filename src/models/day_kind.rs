use crate::utils::date::is_weekend;
use chrono::{Datelike, NaiveDate, Weekday};

/// Flex day: a full day of banked overtime is taken off.
pub const FLEX_DAY_MARKER: &str = "#Gleittag";
/// Vacation day, counted against the yearly entitlement.
pub const VACATION_MARKER: &str = "#Urlaub";
/// Day without any usable clock events.
pub const UNKNOWN_MARKER: &str = "?";

/// Classification of a calendar day, ordered by priority.
///
/// A flex day wins over everything else and debits overtime even on a
/// weekend or holiday. Weekends come before holidays and explicit comments.
/// An exact `?` comment is an earlier backfill, re-evaluated like a work day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayKind {
    Workday,
    Weekend(Weekday),
    Holiday(String),
    FlexDay,
    Commented(String),
    Unknown,
}

impl DayKind {
    pub fn classify(date: NaiveDate, holiday: Option<&str>, comment: &str) -> Self {
        if comment == FLEX_DAY_MARKER {
            DayKind::FlexDay
        } else if is_weekend(date) {
            DayKind::Weekend(date.weekday())
        } else if let Some(label) = holiday {
            DayKind::Holiday(label.to_string())
        } else if comment == UNKNOWN_MARKER {
            DayKind::Unknown
        } else if !comment.is_empty() {
            DayKind::Commented(comment.to_string())
        } else {
            DayKind::Workday
        }
    }

    /// Work days are accounted from their clock events.
    pub fn is_work_day(&self) -> bool {
        matches!(self, DayKind::Workday | DayKind::Unknown)
    }
}

/// Comment label written for weekend days.
pub fn weekend_label(weekday: Weekday) -> Option<&'static str> {
    match weekday {
        Weekday::Sat => Some("#Saturday"),
        Weekday::Sun => Some("#Sunday"),
        _ => None,
    }
}

/// Holiday names are written with a `#` so they survive a ledger rewrite.
pub fn holiday_label(name: &str) -> String {
    format!("#{name}")
}
