use crate::config::Config;
use crate::core::engine::Policy;
use crate::core::holidays::{GermanHolidays, HolidayCache, HolidayOracle};
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use crate::utils::time::DurationFormat;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Single shot: full report, primary ledger left untouched.
    Interactive,
    /// Periodic tick: ledger backed up and rewritten, no report.
    Unattended,
}

/// Everything one run needs, fixed at start.
#[derive(Debug)]
pub struct RunContext<O: HolidayOracle = GermanHolidays> {
    pub now: NaiveDateTime,
    pub mode: RunMode,
    pub ledger: PathBuf,
    pub export: Option<PathBuf>,
    pub cutoff: Option<NaiveDate>,
    pub format: DurationFormat,
    pub policy: Policy,
    pub holidays: HolidayCache<O>,
}

impl RunContext<GermanHolidays> {
    pub fn from_config(cfg: &Config, mode: RunMode, now: NaiveDateTime) -> AppResult<Self> {
        Self::with_oracle(cfg, mode, now, GermanHolidays)
    }
}

impl<O: HolidayOracle> RunContext<O> {
    pub fn with_oracle(
        cfg: &Config,
        mode: RunMode,
        now: NaiveDateTime,
        oracle: O,
    ) -> AppResult<Self> {
        let cutoff = match cfg.cutoff_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => {
                Some(parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?)
            }
        };

        if !cfg.vacation_per_month.is_finite() || cfg.vacation_per_month < 0.0 {
            return Err(AppError::Config(format!(
                "vacation_per_month must be a positive number, got {}",
                cfg.vacation_per_month
            )));
        }

        Ok(Self {
            now,
            mode,
            ledger: cfg.ledger_path(),
            export: cfg.export_path(),
            cutoff,
            format: DurationFormat::from_minutes_flag(cfg.show_minutes),
            policy: Policy::default().with_vacation_per_month(cfg.vacation_per_month),
            holidays: HolidayCache::new(oracle),
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == RunMode::Interactive
    }

    /// Only an unattended run without cutoff may rewrite the primary ledger.
    pub fn rewrites_ledger(&self) -> bool {
        !self.is_interactive() && self.cutoff.is_none()
    }

    /// Last day of the walk: today, or the day before the cutoff.
    pub fn range_end(&self) -> NaiveDate {
        match self.cutoff {
            Some(cutoff) => cutoff.pred_opt().unwrap_or(cutoff).min(self.today()),
            None => self.today(),
        }
    }
}
