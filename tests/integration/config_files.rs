//! Site configuration files on disk.

use std::fs;

use seasonal_paragraphs::config::SiteConfig;
use seasonal_paragraphs::test_utils::summer_config;
use seasonal_paragraphs::SeasonalError;

#[test]
fn test_round_trip_preserves_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");

    let config = summer_config("06-01", "09-01");
    config.save(&path).unwrap();
    assert_eq!(SiteConfig::load(&path).unwrap(), config);
}

#[test]
fn test_hand_written_file_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    fs::write(
        &path,
        r#"
# Site season settings
[summer_season]
from = "05-15"
to = "10-01"
"#,
    )
    .unwrap();

    let window = SiteConfig::load(&path).unwrap().summer_window().unwrap();
    assert_eq!(window.from.to_string(), "05-15");
    assert_eq!(window.to.to_string(), "10-01");
}

#[test]
fn test_unknown_tables_are_tolerated() {
    // The site configuration object carries plenty of host settings this
    // crate does not know about; they must not break parsing.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    fs::write(
        &path,
        r#"
[site]
name = "Example"

[summer_season]
from = "06-01"
to = "09-01"
"#,
    )
    .unwrap();

    assert!(SiteConfig::load(&path).unwrap().summer_window().is_ok());
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    fs::write(&path, "[summer_season\nfrom = ").unwrap();

    let err = SiteConfig::load(&path).unwrap_err();
    assert!(matches!(err, SeasonalError::ConfigParse { .. }), "got {err:?}");
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SiteConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SeasonalError::ConfigRead { .. }), "got {err:?}");
}

#[test]
fn test_malformed_boundary_fails_on_access_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    fs::write(
        &path,
        r#"
[summer_season]
from = "06-01"
to = "31-09"
"#,
    )
    .unwrap();

    let config = SiteConfig::load(&path).unwrap();
    match config.summer_window().unwrap_err() {
        SeasonalError::SettingInvalid { setting, value, .. } => {
            assert_eq!(setting, "summer_season.to");
            assert_eq!(value, "31-09");
        }
        other => panic!("expected SettingInvalid, got {other:?}"),
    }
}
