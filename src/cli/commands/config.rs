use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::process::Command;

/// `--editor`, then `$EDITOR`/`$VISUAL`, then the platform default.
fn resolve_editor(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var("EDITOR").ok())
        .or_else(|| std::env::var("VISUAL").ok())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        if *edit_config {
            let path = Config::config_file();
            let editor = resolve_editor(editor.as_deref());

            let status = Command::new(&editor)
                .arg(&path)
                .status()
                .map_err(|e| AppError::Config(format!("cannot start editor '{editor}': {e}")))?;
            if !status.success() {
                return Err(AppError::Config(format!(
                    "editor '{editor}' exited with {status}"
                )));
            }

            success(format!("{} edited with '{}'", path.display(), editor));
        }
    }

    Ok(())
}
