use super::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn outcome(path: &str, crlf_replaced: usize) -> FileOutcome {
    FileOutcome {
        path: PathBuf::from(path),
        bom_removed: false,
        crlf_replaced,
        written: false,
    }
}

/// Point the config at a temp file so no migfix.yml in the cwd leaks in.
fn isolated_global(root: &Path) -> GlobalArgs {
    let config_path = root.join("migfix.yml");
    fs::write(&config_path, "pattern: \"*.sql\"\n").unwrap();
    GlobalArgs {
        verbose: false,
        config: Some(config_path),
    }
}

#[test]
fn test_file_line_write_mode_always_prints() {
    let line = file_line(&outcome("backend/migrations/001.sql", 0), FixMode::Write);
    assert_eq!(line.as_deref(), Some("Fixed: backend/migrations/001.sql"));
}

#[test]
fn test_file_line_check_mode_only_for_changes() {
    assert_eq!(
        file_line(&outcome("m/001.sql", 2), FixMode::Check).as_deref(),
        Some("Would fix: m/001.sql")
    );
    assert!(file_line(&outcome("m/002.sql", 0), FixMode::Check).is_none());
}

#[test]
fn test_summary_line() {
    let clean = FixReport {
        files: vec![outcome("a.sql", 0)],
    };
    let dirty = FixReport {
        files: vec![outcome("a.sql", 1), outcome("b.sql", 3)],
    };

    assert_eq!(
        summary_line(&FixReport::default(), FixMode::Write),
        "All migration files have been fixed!"
    );
    assert_eq!(
        summary_line(&clean, FixMode::Check),
        "All migration files are already normalized."
    );
    assert_eq!(
        summary_line(&dirty, FixMode::Check),
        "2 migration file(s) need fixing."
    );
}

#[test]
fn test_execute_rewrites_files() {
    let temp = tempdir().unwrap();
    let dir = temp.path().join("migrations");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("001.sql"), b"\xEF\xBB\xBFselect 1;\r\n").unwrap();

    let args = FixArgs {
        dir: Some(dir.clone()),
        ..Default::default()
    };
    execute(&args, &isolated_global(temp.path())).unwrap();

    assert_eq!(fs::read(dir.join("001.sql")).unwrap(), b"select 1;\n".to_vec());
}

#[test]
fn test_execute_check_fails_when_changes_needed() {
    let temp = tempdir().unwrap();
    let dir = temp.path().join("migrations");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("001.sql"), b"select 1;\r\n").unwrap();

    let args = FixArgs {
        dir: Some(dir.clone()),
        check: true,
        ..Default::default()
    };
    let err = execute(&args, &isolated_global(temp.path())).unwrap_err();

    assert_eq!(err.downcast_ref::<ExitCode>().map(|ec| ec.0), Some(1));
    assert_eq!(fs::read(dir.join("001.sql")).unwrap(), b"select 1;\r\n".to_vec());
}

#[test]
fn test_execute_check_passes_when_clean() {
    let temp = tempdir().unwrap();
    let dir = temp.path().join("migrations");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("001.sql"), b"select 1;\n").unwrap();

    let args = FixArgs {
        dir: Some(dir),
        check: true,
        output: OutputFormat::Json,
        ..Default::default()
    };
    assert!(execute(&args, &isolated_global(temp.path())).is_ok());
}

#[test]
fn test_execute_empty_directory_succeeds() {
    let temp = tempdir().unwrap();
    let args = FixArgs {
        dir: Some(temp.path().join("does_not_exist")),
        ..Default::default()
    };
    assert!(execute(&args, &isolated_global(temp.path())).is_ok());
}
