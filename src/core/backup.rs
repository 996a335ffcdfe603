use crate::errors::{AppError, AppResult};
use crate::utils::date::file_stamp;
use crate::utils::path::sibling_with_suffix;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// `<dir>/<base>-<yesterday YYYYMMDD><ext>`
    pub fn backup_path(ledger: &Path, today: NaiveDate) -> PathBuf {
        let yesterday = today.pred_opt().unwrap_or(today);
        sibling_with_suffix(ledger, &file_stamp(yesterday))
    }

    /// Copy the ledger once per day before it gets rewritten.
    /// Returns the new backup path, `None` when nothing had to be copied.
    pub fn backup_once(ledger: &Path, today: NaiveDate) -> AppResult<Option<PathBuf>> {
        if !ledger.exists() {
            return Ok(None);
        }

        let dest = Self::backup_path(ledger, today);
        if dest.exists() {
            return Ok(None);
        }

        fs::copy(ledger, &dest).map_err(|source| AppError::Backup {
            path: dest.clone(),
            source,
        })?;

        log::info!("backup created: {}", dest.display());
        Ok(Some(dest))
    }
}
