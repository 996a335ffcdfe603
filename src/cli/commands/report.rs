use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Core, RunContext, RunMode};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::report::{print_listing, print_summary, print_tally, summary_json};
use crate::utils::date::now;

/// Interactive single-shot run. The primary ledger is left untouched.
pub fn handle(cmd: Option<&Commands>, cfg: &Config) -> AppResult<()> {
    let (json, holidays, quiet) = match cmd {
        Some(Commands::Report {
            json,
            holidays,
            quiet,
        }) => (*json, *holidays, *quiet),
        _ => (false, false, false),
    };

    let mut ctx = RunContext::from_config(cfg, RunMode::Interactive, now())?;

    if !json {
        info(format!("worktime file: {}\n", ctx.ledger.display()));
    }

    let result = Core::tick(&mut ctx)?;

    if json {
        println!("{}", summary_json(&result.totals, &ctx.policy, ctx.format)?);
        return Ok(());
    }

    if !quiet {
        print_listing(&result.entries, ctx.format);
    }
    if holidays {
        print_tally(&result.totals);
    }
    print_summary(&result.totals, &ctx.policy, ctx.format);

    Ok(())
}
