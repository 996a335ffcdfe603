use std::fs;
use worktime::config::Config;
use worktime::core::backup::BackupLogic;
use worktime::core::{Core, RunContext, RunMode};
use worktime::errors::AppError;

mod common;
use common::{NoHolidays, date, temp_dir, ts, write_ledger_file};

fn config_for(ledger: &std::path::Path) -> Config {
    Config {
        ledger_file: ledger.to_string_lossy().to_string(),
        ..Config::default()
    }
}

#[test]
fn test_backup_name_uses_yesterday() {
    let path = std::path::Path::new("/data/worktime.csv");
    let backup = BackupLogic::backup_path(path, date(2024, 3, 1));
    assert_eq!(backup, std::path::PathBuf::from("/data/worktime-20240229.csv"));
}

#[test]
fn test_backup_is_taken_once() {
    let dir = temp_dir("run_backup_once");
    let ledger = write_ledger_file(&dir, &["04.03.2024 08:00"]);

    let first = BackupLogic::backup_once(&ledger, date(2024, 3, 5)).expect("backup");
    let backup = first.expect("backup created");
    assert_eq!(backup, dir.join("worktime-20240304.csv"));
    assert_eq!(
        fs::read_to_string(&backup).unwrap(),
        fs::read_to_string(&ledger).unwrap()
    );

    let second = BackupLogic::backup_once(&ledger, date(2024, 3, 5)).expect("backup");
    assert!(second.is_none());
}

#[test]
fn test_unattended_tick_extends_today() {
    let dir = temp_dir("run_unattended_today");
    let ledger = write_ledger_file(
        &dir,
        &["04.03.2024 08:00", "04.03.2024 16:30", "05.03.2024 08:15"],
    );
    let cfg = config_for(&ledger);

    let mut ctx =
        RunContext::with_oracle(&cfg, RunMode::Unattended, ts(2024, 3, 5, 12, 0), NoHolidays)
            .expect("context");
    let result = Core::tick(&mut ctx).expect("tick");

    assert_eq!(result.entries.len(), 2);
    let today = &result.entries[1];
    assert_eq!(today.start, ts(2024, 3, 5, 8, 15));
    assert_eq!(today.end, ts(2024, 3, 5, 12, 0));

    let content = fs::read_to_string(&ledger).unwrap();
    assert!(content.contains("05.03.2024 08:15;;;;"));
    assert!(content.contains("05.03.2024 12:00;03:45:00;"));
    assert!(dir.join("worktime-20240304.csv").exists());

    // next tick, an hour later
    let mut ctx =
        RunContext::with_oracle(&cfg, RunMode::Unattended, ts(2024, 3, 5, 13, 0), NoHolidays)
            .expect("context");
    let result = Core::tick(&mut ctx).expect("tick");
    assert_eq!(result.entries[1].start, ts(2024, 3, 5, 8, 15));
    assert_eq!(result.entries[1].end, ts(2024, 3, 5, 13, 0));
}

#[test]
fn test_first_tick_on_empty_ledger() {
    let dir = temp_dir("run_first_tick");
    let ledger = dir.join("sub").join("worktime.csv");
    let cfg = config_for(&ledger);

    let mut ctx =
        RunContext::with_oracle(&cfg, RunMode::Unattended, ts(2024, 3, 5, 7, 50), NoHolidays)
            .expect("context");
    let result = Core::tick(&mut ctx).expect("tick");

    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].comment, "?");
    let content = fs::read_to_string(&ledger).expect("ledger created");
    assert!(content.starts_with("05.03.2024 07:50;;;?;"));
}

#[test]
fn test_interactive_tick_keeps_primary_and_writes_export() {
    let dir = temp_dir("run_interactive");
    let ledger = write_ledger_file(&dir, &["04.03.2024 08:00", "04.03.2024 17:00"]);
    let before = fs::read_to_string(&ledger).unwrap();

    let export = dir.join("export.csv");
    let cfg = Config {
        export_file: export.to_string_lossy().to_string(),
        ..config_for(&ledger)
    };

    let mut ctx =
        RunContext::with_oracle(&cfg, RunMode::Interactive, ts(2024, 3, 5, 9, 0), NoHolidays)
            .expect("context");
    Core::tick(&mut ctx).expect("tick");

    assert_eq!(fs::read_to_string(&ledger).unwrap(), before);
    assert!(!dir.join("worktime-20240304.csv").exists());

    let content = fs::read_to_string(&export).expect("export");
    assert!(content.starts_with("Start/End;Duration day;Duration Week;Comment;Overtime;Sum Overtime\n\n"));
    assert!(content.contains("04.03.2024 17:00;08:30:00;;;00:30:00;00:30:00"));
    assert!(content.contains("Count worktime days;2;"));
}

#[test]
fn test_cutoff_run_ends_before_cutoff_without_today() {
    let dir = temp_dir("run_cutoff");
    let ledger = write_ledger_file(
        &dir,
        &[
            "04.03.2024 08:00",
            "04.03.2024 17:00",
            "05.03.2024 08:00",
            "05.03.2024 17:00",
            "06.03.2024 08:00",
        ],
    );
    let cfg = Config {
        cutoff_date: Some("2024-03-05".to_string()),
        ..config_for(&ledger)
    };

    let mut ctx =
        RunContext::with_oracle(&cfg, RunMode::Interactive, ts(2024, 3, 20, 9, 0), NoHolidays)
            .expect("context");
    let result = Core::tick(&mut ctx).expect("tick");

    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].date, date(2024, 3, 4));
}

#[test]
fn test_malformed_ledger_touches_nothing() {
    let dir = temp_dir("run_malformed");
    let ledger = write_ledger_file(&dir, &["04.03.2024 08:00", "4.3.2024 17:00"]);
    let before = fs::read_to_string(&ledger).unwrap();

    let export = dir.join("export.csv");
    let cfg = Config {
        export_file: export.to_string_lossy().to_string(),
        ..config_for(&ledger)
    };

    let mut ctx =
        RunContext::with_oracle(&cfg, RunMode::Unattended, ts(2024, 3, 5, 9, 0), NoHolidays)
            .expect("context");
    let err = Core::tick(&mut ctx).expect_err("malformed");

    assert!(matches!(err, AppError::TimestampFormat(_)));
    assert_eq!(fs::read_to_string(&ledger).unwrap(), before);
    assert!(!export.exists());
}

#[test]
fn test_invalid_cutoff_in_config() {
    let cfg = Config {
        cutoff_date: Some("05.03.2024".to_string()),
        ..Config::default()
    };
    let err = RunContext::with_oracle(&cfg, RunMode::Interactive, ts(2024, 3, 5, 9, 0), NoHolidays)
        .expect_err("bad cutoff");
    assert!(matches!(err, AppError::InvalidDate(_)));
}

#[test]
fn test_config_file_defaults_and_overrides() {
    let dir = temp_dir("run_config");
    let path = dir.join("worktime.conf");
    fs::write(&path, "ledger_file: /tmp/x.csv\nshow_minutes: true\n").unwrap();

    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.ledger_file, "/tmp/x.csv");
    assert!(cfg.show_minutes);
    assert_eq!(cfg.vacation_per_month, 2.5);
    assert_eq!(cfg.service_interval_secs, 60);
    assert!(cfg.export_path().is_none());

    fs::write(&path, "ledger_file: [unclosed\n").unwrap();
    assert!(Config::load_from(&path).is_err());

    let missing = Config::load_from(&dir.join("missing.conf")).expect("defaults");
    assert!(missing.ledger_file.ends_with("worktime.csv"));
}

#[test]
fn test_unattended_cutoff_run_keeps_ledger() {
    let dir = temp_dir("run_cutoff_unattended");
    let ledger = write_ledger_file(
        &dir,
        &[
            "04.03.2024 08:00",
            "04.03.2024 17:00",
            "12.03.2024 08:00",
            "12.03.2024 16:00",
        ],
    );
    let before = fs::read_to_string(&ledger).unwrap();
    let cfg = Config {
        cutoff_date: Some("2024-03-06".to_string()),
        ..config_for(&ledger)
    };

    let mut ctx =
        RunContext::with_oracle(&cfg, RunMode::Unattended, ts(2024, 3, 20, 9, 0), NoHolidays)
            .expect("context");
    let result = Core::tick(&mut ctx).expect("tick");

    assert_eq!(result.entries.len(), 2);
    assert_eq!(result.entries[1].date, date(2024, 3, 5));
    assert_eq!(fs::read_to_string(&ledger).unwrap(), before);

    // a second tick still sees the records after the cutoff
    let mut ctx =
        RunContext::with_oracle(&cfg, RunMode::Unattended, ts(2024, 3, 20, 9, 1), NoHolidays)
            .expect("context");
    Core::tick(&mut ctx).expect("tick");
    assert!(fs::read_to_string(&ledger).unwrap().contains("12.03.2024 08:00"));
}

#[test]
fn test_future_cutoff_keeps_todays_punches() {
    let dir = temp_dir("run_cutoff_future");
    let ledger = write_ledger_file(
        &dir,
        &["04.03.2024 08:00", "04.03.2024 17:00", "05.03.2024 10:00"],
    );
    let cfg = Config {
        cutoff_date: Some("2024-12-31".to_string()),
        ..config_for(&ledger)
    };

    let mut ctx =
        RunContext::with_oracle(&cfg, RunMode::Interactive, ts(2024, 3, 5, 12, 0), NoHolidays)
            .expect("context");
    let result = Core::tick(&mut ctx).expect("tick");

    assert_eq!(result.entries.len(), 2);
    let today = &result.entries[1];
    assert_eq!(today.start, ts(2024, 3, 5, 10, 0));
    assert_eq!(today.end, ts(2024, 3, 5, 12, 0));
    assert_eq!(today.comment, "");
    assert_eq!(today.worktime, chrono::Duration::hours(2));
}

#[test]
fn test_cutoff_on_today_leaves_today_out() {
    let dir = temp_dir("run_cutoff_today");
    let ledger = write_ledger_file(
        &dir,
        &["04.03.2024 08:00", "04.03.2024 17:00", "05.03.2024 10:00"],
    );
    let cfg = Config {
        cutoff_date: Some("2024-03-05".to_string()),
        ..config_for(&ledger)
    };

    let mut ctx =
        RunContext::with_oracle(&cfg, RunMode::Interactive, ts(2024, 3, 5, 12, 0), NoHolidays)
            .expect("context");
    let result = Core::tick(&mut ctx).expect("tick");

    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].date, date(2024, 3, 4));
}
