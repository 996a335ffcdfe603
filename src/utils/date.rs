use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Current local wall-clock time, truncated to whole minutes like the ledger.
pub fn now() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.date()
        .and_hms_opt(now.hour(), now.minute(), 0)
        .unwrap_or(now)
}

pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn is_midnight(ts: &NaiveDateTime) -> bool {
    ts.time() == NaiveTime::MIN
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_first_of_month(date: NaiveDate) -> bool {
    date.day() == 1
}

/// April 1st opens a new fiscal (vacation) year.
pub fn is_fiscal_year_start(date: NaiveDate) -> bool {
    date.month() == 4 && date.day() == 1
}

/// Sortable date stamp used in backup file names, e.g. `20250131`.
pub fn file_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
