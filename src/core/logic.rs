use crate::core::backup::BackupLogic;
use crate::core::context::RunContext;
use crate::core::engine::{Reconciliation, reconcile};
use crate::core::holidays::HolidayOracle;
use crate::errors::AppResult;
use crate::ledger::{ParsedLedger, read_ledger, write_export, write_ledger};
use crate::models::Day;
use crate::ui::report::summary_rows;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub struct Core;

impl Core {
    /// Merge the parsed ledger with the current clock event of today.
    pub fn build_days<O: HolidayOracle>(
        parsed: ParsedLedger,
        ctx: &RunContext<O>,
    ) -> BTreeMap<NaiveDate, Day> {
        let mut days = parsed.days;
        let today = ctx.today();

        // Today is only part of the walk while the cutoff lies ahead of it.
        if ctx.cutoff.is_some_and(|cutoff| cutoff <= today) {
            return days;
        }

        if !days.contains_key(&today) {
            let (start, comment) = match parsed.today {
                Some(obs) => (obs.start, obs.comment),
                None => (ctx.now, String::new()),
            };
            days.insert(
                today,
                Day {
                    date: today,
                    start,
                    end: ctx.now.max(start),
                    comment,
                },
            );
        }

        days
    }

    /// One complete run: read, reconcile, write.
    pub fn tick<O: HolidayOracle>(ctx: &mut RunContext<O>) -> AppResult<Reconciliation> {
        let today = ctx.today();

        let parsed = if ctx.ledger.exists() {
            if !ctx.is_interactive() {
                BackupLogic::backup_once(&ctx.ledger, today)?;
            }
            read_ledger(&ctx.ledger, today, ctx.cutoff)?
        } else {
            ParsedLedger::default()
        };

        let days = Self::build_days(parsed, ctx);
        let start = days.keys().next().copied().unwrap_or(today);
        let end = ctx.range_end();

        let result = reconcile(&days, start, end, &ctx.policy, &mut ctx.holidays);

        if ctx.rewrites_ledger() {
            write_ledger(&ctx.ledger, &result.entries, ctx.format)?;
            log::debug!("ledger rewritten: {}", ctx.ledger.display());
        } else if !ctx.is_interactive() {
            log::info!("cutoff set, ledger left untouched: {}", ctx.ledger.display());
        }

        if let Some(export) = &ctx.export {
            let summary = if ctx.is_interactive() {
                summary_rows(&result.totals, &ctx.policy, ctx.format)
            } else {
                Vec::new()
            };
            write_export(export, &result.entries, ctx.format, &summary)?;
            log::debug!("export written: {}", export.display());
        }

        Ok(result)
    }
}
