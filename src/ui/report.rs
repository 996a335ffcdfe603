//! Console output of a run: numbered day listing, summary and label tally.

use crate::core::engine::Policy;
use crate::errors::{AppError, AppResult};
use crate::models::{DayEntry, Totals};
use crate::utils::colors::{RESET, color_for_comment, color_for_overtime};
use crate::utils::table::{Column, Table};
use crate::utils::time::DurationFormat;
use serde::Serialize;
use std::collections::BTreeMap;

/// Label/value pairs of the final report, shared by console and export.
pub fn summary_rows(
    totals: &Totals,
    policy: &Policy,
    fmt: DurationFormat,
) -> Vec<(String, String)> {
    vec![
        ("Count worktime days".into(), totals.work_days.to_string()),
        (
            "Count non worktime days".into(),
            totals.non_work_days.to_string(),
        ),
        (
            "Average worktime".into(),
            fmt.format(totals.average_worktime()),
        ),
        ("Sum worktime".into(), fmt.format(totals.worktime)),
        ("Sum overtime".into(), fmt.format(totals.overtime)),
        ("Sum vacation".into(), totals.vacation_taken.to_string()),
        (
            "Remaining vacation".into(),
            totals
                .vacation_remaining(policy.vacation_per_month)
                .to_string(),
        ),
    ]
}

/// `NNN : <ledger line>` for every output line.
pub fn print_listing(entries: &[DayEntry], fmt: DurationFormat) {
    let mut c = 0;
    for entry in entries {
        let [line0, line1] = entry.records(fmt);
        c += 1;
        println!(
            "{:<3} : {}{}{}",
            c,
            color_for_comment(&entry.comment),
            line0.join(";"),
            RESET
        );
        c += 1;
        println!(
            "{:<3} : {}{}{}",
            c,
            color_for_overtime(entry.overtime.num_minutes()),
            line1.join(";"),
            RESET
        );
    }
}

pub fn print_summary(totals: &Totals, policy: &Policy, fmt: DurationFormat) {
    println!();
    for (label, value) in summary_rows(totals, policy, fmt) {
        println!("{:<23} : {}", label, value);
    }
}

pub fn tally_table(totals: &Totals) -> Table {
    let mut table = Table::new(vec![Column::new("Label", 23), Column::new("Count", 5)]);
    for (label, count) in &totals.label_tally {
        table.add_row(vec![label.clone(), count.to_string()]);
    }
    table.fit();
    table
}

pub fn print_tally(totals: &Totals) {
    println!();
    print!("{}", tally_table(totals).render());
}

#[derive(Debug, Serialize)]
pub struct SummaryJson {
    pub work_days: i64,
    pub non_work_days: i64,
    pub average_worktime: String,
    pub worktime: String,
    pub overtime: String,
    pub vacation_taken: i64,
    pub vacation_remaining: i64,
    pub labels: BTreeMap<String, u32>,
}

impl SummaryJson {
    pub fn new(totals: &Totals, policy: &Policy, fmt: DurationFormat) -> Self {
        Self {
            work_days: totals.work_days,
            non_work_days: totals.non_work_days,
            average_worktime: fmt.format(totals.average_worktime()),
            worktime: fmt.format(totals.worktime),
            overtime: fmt.format(totals.overtime),
            vacation_taken: totals.vacation_taken,
            vacation_remaining: totals.vacation_remaining(policy.vacation_per_month),
            labels: totals.label_tally.clone(),
        }
    }
}

pub fn summary_json(totals: &Totals, policy: &Policy, fmt: DurationFormat) -> AppResult<String> {
    serde_json::to_string_pretty(&SummaryJson::new(totals, policy, fmt)).map_err(|e| {
        AppError::from(std::io::Error::other(format!(
            "JSON serialization error: {e}"
        )))
    })
}
