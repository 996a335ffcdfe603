//! Time utilities: ledger timestamp parsing and duration formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime};

/// Ledger timestamp mask, `DD.MM.YYYY HH:MM`.
pub const TIMESTAMP_MASK: &str = "%d.%m.%Y %H:%M";

/// Parse a ledger timestamp. Field widths and separators are fixed.
pub fn parse_timestamp(txt: &str) -> AppResult<NaiveDateTime> {
    let b = txt.as_bytes();
    let shape_ok = b.len() == 16
        && b[2] == b'.'
        && b[5] == b'.'
        && b[10] == b' '
        && b[13] == b':'
        && b
            .iter()
            .enumerate()
            .all(|(i, c)| matches!(i, 2 | 5 | 10 | 13) || c.is_ascii_digit());

    if !shape_ok {
        return Err(AppError::TimestampFormat(txt.to_string()));
    }

    NaiveDateTime::parse_from_str(txt, TIMESTAMP_MASK)
        .map_err(|_| AppError::TimestampFormat(txt.to_string()))
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_MASK).to_string()
}

/// How durations are rendered in the ledger and on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationFormat {
    /// Whole minutes, e.g. `510`
    Minutes,
    /// `HH:MM:SS`, e.g. `08:30:00`
    #[default]
    Clock,
}

impl DurationFormat {
    pub fn from_minutes_flag(minutes: bool) -> Self {
        if minutes {
            DurationFormat::Minutes
        } else {
            DurationFormat::Clock
        }
    }

    pub fn format(&self, d: Duration) -> String {
        match self {
            DurationFormat::Minutes => d.num_minutes().to_string(),
            DurationFormat::Clock => {
                let secs = d.num_seconds();
                let sign = if secs < 0 { "-" } else { "" };
                let s = secs.abs();
                format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
            }
        }
    }
}
