use crate::errors::{AppError, AppResult};
use crate::models::DayEntry;
use crate::utils::time::DurationFormat;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

pub const EXPORT_HEADER: [&str; 6] = [
    "Start/End",
    "Duration day",
    "Duration Week",
    "Comment",
    "Overtime",
    "Sum Overtime",
];

fn ledger_writer<W: Write>(w: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(w)
}

fn write_entries<W: Write>(
    wtr: &mut csv::Writer<W>,
    entries: &[DayEntry],
    fmt: DurationFormat,
) -> AppResult<()> {
    for entry in entries {
        for record in entry.records(fmt) {
            wtr.write_record(&record)?;
        }
    }
    Ok(())
}

fn create_file(path: &Path) -> AppResult<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| AppError::file_access(parent, e))?;
    }

    File::create(path).map_err(|e| AppError::file_access(path, e))
}

/// Rewrite the primary ledger with the reconciled days.
pub fn write_ledger(path: &Path, entries: &[DayEntry], fmt: DurationFormat) -> AppResult<()> {
    let mut wtr = ledger_writer(create_file(path)?);
    write_entries(&mut wtr, entries, fmt)?;
    wtr.flush()?;
    Ok(())
}

/// Hand the file back from the csv writer to put an empty line in between.
fn blank_line(wtr: csv::Writer<File>) -> AppResult<csv::Writer<File>> {
    let mut file = wtr
        .into_inner()
        .map_err(|e| io::Error::new(e.error().kind(), e.error().to_string()))?;
    file.write_all(b"\n")?;
    Ok(ledger_writer(file))
}

/// Export file: header row, blank line, day lines, then optional summary rows.
pub fn write_export(
    path: &Path,
    entries: &[DayEntry],
    fmt: DurationFormat,
    summary: &[(String, String)],
) -> AppResult<()> {
    let mut wtr = ledger_writer(create_file(path)?);
    wtr.write_record(EXPORT_HEADER)?;

    let mut wtr = blank_line(wtr)?;
    write_entries(&mut wtr, entries, fmt)?;

    if !summary.is_empty() {
        wtr = blank_line(wtr)?;
        for (label, value) in summary {
            wtr.write_record([label.as_str(), value.as_str(), "", "", "", ""])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
