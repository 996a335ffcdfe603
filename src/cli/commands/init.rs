use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty ledger file
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing worktime…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Ledger      : {}", cfg.ledger_path().display());

    cfg.init_all(cli.test)?;

    println!("🎉 worktime initialization completed!");
    Ok(())
}
