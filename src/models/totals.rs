use chrono::Duration;
use std::collections::BTreeMap;

/// Final accumulator snapshot of a reconciliation walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    pub work_days: i64,
    pub non_work_days: i64,
    pub worktime: Duration,
    pub overtime: Duration,
    /// First-of-month days seen, used to prorate the vacation entitlement.
    pub months: i64,
    /// Vacation days taken in the current fiscal year.
    pub vacation_taken: i64,
    /// `"<year> <label>"` → occurrences
    pub label_tally: BTreeMap<String, u32>,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            work_days: 0,
            non_work_days: 0,
            worktime: Duration::zero(),
            overtime: Duration::zero(),
            months: 0,
            vacation_taken: 0,
            label_tally: BTreeMap::new(),
        }
    }
}

impl Totals {
    /// Average worktime per work day; zero below two samples.
    pub fn average_worktime(&self) -> Duration {
        if self.work_days < 2 {
            return Duration::zero();
        }
        self.worktime / self.work_days as i32
    }

    pub fn vacation_entitlement(&self, vacation_per_month: f64) -> i64 {
        (self.months as f64 * vacation_per_month).floor() as i64
    }

    pub fn vacation_remaining(&self, vacation_per_month: f64) -> i64 {
        self.vacation_entitlement(vacation_per_month) - self.vacation_taken
    }
}
