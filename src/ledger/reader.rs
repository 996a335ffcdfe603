use crate::errors::{AppError, AppResult};
use crate::models::Day;
use crate::utils::time::parse_timestamp;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Clock events of the run date, kept apart from the historical days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayObservation {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub comment: String,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedLedger {
    pub today: Option<TodayObservation>,
    pub days: BTreeMap<NaiveDate, Day>,
}

/// Merges raw ledger records into one Day per date.
pub struct LedgerParser {
    today: NaiveDate,
    cutoff: Option<NaiveDate>,
    parsed: ParsedLedger,
}

impl LedgerParser {
    pub fn new(today: NaiveDate, cutoff: Option<NaiveDate>) -> Self {
        Self {
            today,
            cutoff,
            parsed: ParsedLedger::default(),
        }
    }

    /// Feed one record. Returns `false` once the cutoff date is reached.
    pub fn feed<S: AsRef<str>>(&mut self, record: &[S]) -> AppResult<bool> {
        if record.iter().all(|f| f.as_ref().trim().is_empty()) {
            return Ok(true);
        }

        let token = record[0].as_ref();
        let token = token.split(',').next().unwrap_or(token).trim();
        let ts = parse_timestamp(token)?;
        let date = ts.date();

        if self.cutoff == Some(date) {
            return Ok(false);
        }

        let comment = record
            .get(3)
            .map(|c| c.as_ref().trim_start())
            .filter(|c| c.starts_with('#') || c.starts_with('?'))
            .unwrap_or("");

        if date == self.today {
            match &mut self.parsed.today {
                Some(obs) => obs.end = Some(ts),
                None => {
                    self.parsed.today = Some(TodayObservation {
                        start: ts,
                        end: None,
                        comment: comment.to_string(),
                    })
                }
            }
        } else if let Some(day) = self.parsed.days.get_mut(&date) {
            day.record(ts);
        } else {
            self.parsed.days.insert(date, Day::observed(ts, comment));
        }

        Ok(true)
    }

    pub fn finish(self) -> ParsedLedger {
        self.parsed
    }
}

/// Parse a `;` separated ledger stream.
pub fn parse_ledger<R: Read>(
    rdr: R,
    today: NaiveDate,
    cutoff: Option<NaiveDate>,
) -> AppResult<ParsedLedger> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);

    let mut parser = LedgerParser::new(today, cutoff);

    for result in reader.records() {
        let record = result?;
        let fields: Vec<&str> = record.iter().collect();
        if !parser.feed(&fields)? {
            break;
        }
    }

    Ok(parser.finish())
}

pub fn read_ledger(
    path: &Path,
    today: NaiveDate,
    cutoff: Option<NaiveDate>,
) -> AppResult<ParsedLedger> {
    let file = File::open(path).map_err(|e| AppError::file_access(path, e))?;
    parse_ledger(file, today, cutoff)
}
