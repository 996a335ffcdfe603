use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,
    /// Empty string disables the export file.
    #[serde(default)]
    pub export_file: String,
    #[serde(default)]
    pub show_minutes: bool,
    #[serde(default = "default_vacation_per_month")]
    pub vacation_per_month: f64,
    /// Restrict processing to the ledger as of this date (YYYY-MM-DD).
    #[serde(default)]
    pub cutoff_date: Option<String>,
    #[serde(default = "default_service_interval")]
    pub service_interval_secs: u64,
}

fn default_ledger_file() -> String {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join("Documents")
        .join("worktime")
        .join("worktime.csv")
        .to_string_lossy()
        .to_string()
}
fn default_vacation_per_month() -> f64 {
    2.5
}
fn default_service_interval() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_file: default_ledger_file(),
            export_file: String::new(),
            show_minutes: false,
            vacation_per_month: default_vacation_per_month(),
            cutoff_date: None,
            service_interval_secs: default_service_interval(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worktime")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worktime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worktime.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Ledger path with `~/` expanded.
    pub fn ledger_path(&self) -> PathBuf {
        expand_tilde(&self.ledger_file)
    }

    /// Export path, `None` when exporting is disabled.
    pub fn export_path(&self) -> Option<PathBuf> {
        let trimmed = self.export_file.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(expand_tilde(trimmed))
        }
    }

    /// Initialize the configuration file and an empty ledger.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        let ledger = self.ledger_path();
        if let Some(parent) = ledger.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| AppError::file_access(parent, e))?;
        }

        // Create empty ledger if not exists
        if !ledger.exists() {
            fs::File::create(&ledger).map_err(|e| AppError::file_access(&ledger, e))?;
        }

        println!("✅ Ledger:      {:?}", ledger);

        Ok(())
    }
}
