//! Day reconciliation: walks the calendar range, classifies every day and
//! folds worktime, overtime, weekly and vacation accumulators.

use crate::core::holidays::{HolidayCache, HolidayOracle};
use crate::models::day_kind::{
    DayKind, UNKNOWN_MARKER, VACATION_MARKER, holiday_label, weekend_label,
};
use crate::models::{Day, DayEntry, Totals};
use crate::utils::date::{is_first_of_month, is_fiscal_year_start, is_midnight, midnight};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use std::collections::BTreeMap;

/// Accounting constants.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    pub daily_target: Duration,
    pub overtime_cap: Duration,
    /// Days longer than this get the lunch break deducted.
    pub lunch_threshold: Duration,
    pub lunch_break: Duration,
    pub flex_day_debit: Duration,
    /// Reported on the first Friday when the range starts mid-week.
    pub nominal_week: Duration,
    pub default_start: NaiveTime,
    pub default_end: NaiveTime,
    pub vacation_per_month: f64,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            daily_target: Duration::hours(8),
            overtime_cap: Duration::hours(2),
            lunch_threshold: Duration::hours(6),
            lunch_break: Duration::minutes(30),
            flex_day_debit: Duration::hours(8),
            nominal_week: Duration::hours(40),
            default_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN),
            default_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN),
            vacation_per_month: 2.5,
        }
    }
}

impl Policy {
    pub fn with_vacation_per_month(mut self, days: f64) -> Self {
        self.vacation_per_month = days;
        self
    }

    /// Net worktime of a clocked day, lunch deducted past the threshold.
    pub fn net_worktime(&self, gross: Duration) -> Duration {
        if gross > self.lunch_threshold {
            gross - self.lunch_break
        } else {
            gross
        }
    }

    /// Credit above target is capped, undertime is debited in full.
    pub fn overtime(&self, worktime: Duration) -> Duration {
        let diff = worktime - self.daily_target;
        if worktime > self.daily_target {
            diff.min(self.overtime_cap)
        } else {
            diff
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    pub entries: Vec<DayEntry>,
    pub totals: Totals,
}

/// Running weekly sum, anchored on Mondays.
#[derive(Debug)]
struct WeekTracker {
    sum: Duration,
    anchored: bool,
}

impl WeekTracker {
    fn new() -> Self {
        Self {
            sum: Duration::zero(),
            anchored: false,
        }
    }

    fn push(
        &mut self,
        weekday: Weekday,
        worktime: Duration,
        nominal: Duration,
    ) -> Option<Duration> {
        if weekday == Weekday::Mon {
            self.anchored = true;
            self.sum = worktime;
        } else {
            self.sum += worktime;
        }

        match (weekday, self.anchored) {
            (Weekday::Fri, true) => Some(self.sum),
            (Weekday::Fri, false) => Some(nominal),
            _ => None,
        }
    }
}

/// Walk `start..=end` over `days` and account every calendar day.
pub fn reconcile<O: HolidayOracle>(
    days: &BTreeMap<NaiveDate, Day>,
    start: NaiveDate,
    end: NaiveDate,
    policy: &Policy,
    holidays: &mut HolidayCache<O>,
) -> Reconciliation {
    let mut out = Reconciliation::default();
    let mut week = WeekTracker::new();

    for date in start.iter_days().take_while(|d| *d <= end) {
        let mut day = days
            .get(&date)
            .cloned()
            .unwrap_or_else(|| Day::placeholder(date));
        let totals = &mut out.totals;

        if is_first_of_month(date) {
            totals.months += 1;
        }

        let holiday = holidays.label_for(date).map(str::to_string);
        let kind = DayKind::classify(date, holiday.as_deref(), &day.comment);

        if is_fiscal_year_start(date) {
            totals.vacation_taken = 0;
        }
        if day.comment == VACATION_MARKER {
            totals.vacation_taken += 1;
        }

        if kind == DayKind::Unknown && is_default_window(&day, policy) {
            day.start = midnight(date);
            day.end = midnight(date);
        }

        let mut comment = display_comment(date, &kind, &day.comment, holiday.as_deref());
        let mut worktime = Duration::zero();
        let mut overtime = Duration::zero();

        if kind.is_work_day() {
            worktime = policy.net_worktime(day.end - day.start);
            overtime = policy.overtime(worktime);
            totals.work_days += 1;

            if worktime.is_zero() {
                comment = UNKNOWN_MARKER.to_string();
                if is_midnight(&day.start) && is_midnight(&day.end) {
                    day.start = date.and_time(policy.default_start);
                    day.end = date.and_time(policy.default_end);
                    worktime = policy.daily_target;
                    overtime = Duration::zero();
                }
            }
        } else {
            day.start = midnight(date);
            day.end = midnight(date);
            if kind == DayKind::FlexDay {
                overtime = -policy.flex_day_debit;
            }
            totals.non_work_days += 1;
        }

        totals.worktime += worktime;
        totals.overtime += overtime;

        let week_sum = week.push(date.weekday(), worktime, policy.nominal_week);

        let tally = holiday
            .as_deref()
            .map(holiday_label)
            .unwrap_or_else(|| comment.clone());
        if tally.starts_with('#') {
            *totals
                .label_tally
                .entry(format!("{} {}", date.year(), tally))
                .or_insert(0) += 1;
        }

        let overtime_total = totals.overtime;
        out.entries.push(DayEntry {
            date,
            kind,
            start: day.start,
            end: day.end,
            comment,
            worktime,
            overtime,
            week_sum,
            overtime_total,
        });
    }

    out
}

/// Weekends always carry their day name; otherwise the user's comment wins
/// over the holiday name. A previous `?` is recomputed from scratch.
fn display_comment(
    date: NaiveDate,
    kind: &DayKind,
    comment: &str,
    holiday: Option<&str>,
) -> String {
    if let Some(label) = weekend_label(date.weekday()) {
        return label.to_string();
    }
    if kind == &DayKind::Unknown {
        return String::new();
    }
    if !comment.is_empty() {
        return comment.to_string();
    }
    holiday.map(holiday_label).unwrap_or_default()
}

fn is_default_window(day: &Day, policy: &Policy) -> bool {
    day.start == day.date.and_time(policy.default_start)
        && day.end == day.date.and_time(policy.default_end)
}
