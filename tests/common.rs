#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use worktime::core::{Holiday, HolidayCache, HolidayOracle, Policy, Reconciliation, reconcile};
use worktime::models::Day;

pub fn wt() -> Command {
    cargo_bin_cmd!("worktime")
}

/// Fresh per-test directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("worktime_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write a ledger file with the given lines and return its path
pub fn write_ledger_file(dir: &PathBuf, lines: &[&str]) -> PathBuf {
    let path = dir.join("worktime.csv");
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).expect("write ledger");
    path
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

/// A day clocked from `start` to `end` (hours, minutes)
pub fn clocked(d: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Day {
    let mut day = Day::observed(d.and_hms_opt(start.0, start.1, 0).unwrap(), "");
    day.record(d.and_hms_opt(end.0, end.1, 0).unwrap());
    day
}

pub fn commented(d: NaiveDate, comment: &str) -> Day {
    Day::observed(d.and_hms_opt(0, 0, 0).unwrap(), comment)
}

pub fn day_set(days: Vec<Day>) -> BTreeMap<NaiveDate, Day> {
    days.into_iter().map(|d| (d.date, d)).collect()
}

/// Calendar without any public holidays
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHolidays;

impl HolidayOracle for NoHolidays {
    fn holidays(&self, _year: i32) -> Vec<Holiday> {
        Vec::new()
    }
}

pub fn run_plain(days: Vec<Day>, start: NaiveDate, end: NaiveDate) -> Reconciliation {
    let mut cache = HolidayCache::new(NoHolidays);
    reconcile(&day_set(days), start, end, &Policy::default(), &mut cache)
}
