use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Core, RunContext, RunMode};
use crate::errors::AppResult;
use crate::utils::date::now;
use crate::utils::time::DurationFormat;
use std::thread;
use std::time::Duration;

/// One unattended tick with a fresh context.
fn tick(cfg: &Config) -> AppResult<()> {
    let mut ctx = RunContext::from_config(cfg, RunMode::Unattended, now())?;
    let result = Core::tick(&mut ctx)?;

    log::info!(
        "tick: {} days reconciled, overtime {}",
        result.entries.len(),
        DurationFormat::Clock.format(result.totals.overtime)
    );
    Ok(())
}

/// Unattended periodic mode. A failed tick is logged and superseded by the next one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Service { once, interval } = cmd {
        if *once {
            return tick(cfg);
        }

        let secs = interval.unwrap_or(cfg.service_interval_secs).max(1);
        log::info!(
            "worktime service started, ledger {}, every {}s",
            cfg.ledger_path().display(),
            secs
        );

        loop {
            if let Err(e) = tick(cfg) {
                log::error!("tick failed: {e}");
            }
            thread::sleep(Duration::from_secs(secs));
        }
    }

    Ok(())
}
