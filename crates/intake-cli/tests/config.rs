//! Settings file loading tests.

use std::io::Write;

use intake_cli::config::{ConfigError, Settings, load_settings};
use intake_dates::DateOrder;
use intake_ingest::CommitPolicy;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn full_config_file_is_loaded() {
    let file = write_config(
        "date_order = \"month_first\"\n\
         commit_policy = \"valid-subset\"\n\
         encoding = \"windows-1252\"\n\
         max_upload_bytes = 2048\n",
    );
    let settings = load_settings(Some(file.path())).unwrap();
    assert_eq!(
        settings,
        Settings {
            date_order: DateOrder::MonthFirst,
            commit_policy: CommitPolicy::ValidSubset,
            encoding: "windows-1252".to_string(),
            max_upload_bytes: 2048,
        }
    );
}

#[test]
fn empty_config_file_uses_defaults() {
    let file = write_config("");
    assert_eq!(load_settings(Some(file.path())).unwrap(), Settings::default());
}

#[test]
fn missing_config_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_settings(Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn malformed_config_file_is_a_parse_error() {
    let file = write_config("commit_policy = \"sometimes\"\n");
    let result = load_settings(Some(file.path()));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}
