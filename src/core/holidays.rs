//! Public holidays: the oracle trait, the German calendar and a per-year cache.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub date: NaiveDate,
    pub label: String,
}

/// Source of public holidays for a given year.
pub trait HolidayOracle {
    fn holidays(&self, year: i32) -> Vec<Holiday>;
}

/// Holidays observed in Germany (Bavarian set, plus Christmas Eve).
///
/// Fixed dates:
/// * Neujahr (Jan 1)
/// * Heilige Drei Könige (Jan 6)
/// * Tag der Arbeit (May 1)
/// * Mariä Himmelfahrt (Aug 15)
/// * Tag der Deutschen Einheit (Oct 3)
/// * Allerheiligen (Nov 1)
/// * Heiligabend, Weihnachten, Zweiter Weihnachtsfeiertag (Dec 24-26)
///
/// Movable, relative to Easter Sunday:
/// * Karfreitag (-2), Ostermontag (+1), Christi Himmelfahrt (+39),
///   Pfingstmontag (+50), Fronleichnam (+60)
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanHolidays;

impl HolidayOracle for GermanHolidays {
    fn holidays(&self, year: i32) -> Vec<Holiday> {
        let fixed = [
            (1, 1, "Neujahr"),
            (1, 6, "Heilige Drei Könige"),
            (5, 1, "Tag der Arbeit"),
            (8, 15, "Mariä Himmelfahrt"),
            (10, 3, "Tag der Deutschen Einheit"),
            (11, 1, "Allerheiligen"),
            (12, 24, "Heiligabend"),
            (12, 25, "Weihnachten"),
            (12, 26, "Zweiter Weihnachtsfeiertag"),
        ];

        let mut out: Vec<Holiday> = fixed
            .iter()
            .filter_map(|&(m, d, label)| {
                NaiveDate::from_ymd_opt(year, m, d).map(|date| Holiday {
                    date,
                    label: label.to_string(),
                })
            })
            .collect();

        if let Some(easter) = easter_sunday(year) {
            let movable = [
                (-2, "Karfreitag"),
                (1, "Ostermontag"),
                (39, "Christi Himmelfahrt"),
                (50, "Pfingstmontag"),
                (60, "Fronleichnam"),
            ];
            out.extend(movable.iter().map(|&(offset, label)| Holiday {
                date: easter + Duration::days(offset),
                label: label.to_string(),
            }));
        }

        out.sort_by_key(|h| h.date);
        out
    }
}

/// Easter Sunday of the Gregorian calendar (anonymous computus).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Memoizes oracle answers per year.
#[derive(Debug, Default)]
pub struct HolidayCache<O: HolidayOracle> {
    oracle: O,
    years: HashMap<i32, Vec<Holiday>>,
}

impl<O: HolidayOracle> HolidayCache<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            years: HashMap::new(),
        }
    }

    pub fn for_year(&mut self, year: i32) -> &[Holiday] {
        let oracle = &self.oracle;
        self.years
            .entry(year)
            .or_insert_with(|| oracle.holidays(year))
    }

    /// Holiday name of `date`, if any.
    pub fn label_for(&mut self, date: NaiveDate) -> Option<&str> {
        self.for_year(date.year())
            .iter()
            .find(|h| h.date == date)
            .map(|h| h.label.as_str())
    }

    pub fn cached_years(&self) -> usize {
        self.years.len()
    }
}
