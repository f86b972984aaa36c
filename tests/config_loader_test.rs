use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

use jumpzone::config::{ConfigLoader, ConfigSource, SiteConfig};
use jumpzone::io::paths::JumpzonePaths;

fn loader(dir: &TempDir) -> ConfigLoader {
    let paths = JumpzonePaths::for_project(&dir.path().join("platform"));
    ConfigLoader::with_roots(dir.path().join("work"), paths)
}

fn setup() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("work")).unwrap();
    dir
}

#[test]
fn test_defaults_when_nothing_found() {
    let dir = setup();
    let (config, source) = loader(&dir).discover(None).unwrap();
    assert_eq!(source, ConfigSource::Defaults);
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.booking.reset_delay_ms, 400);
    assert_eq!(config.navigation.len(), 7);
    assert!(!config.locations.is_empty());
}

#[test]
fn test_working_directory_file_wins_over_platform_file() {
    let dir = setup();
    let platform = JumpzonePaths::for_project(&dir.path().join("platform"));
    platform.ensure_directories().unwrap();
    fs::write(platform.config_file(), "business:\n  name: Platform Park\n").unwrap();
    fs::write(
        dir.path().join("work/jumpzone.yaml"),
        "business:\n  name: Local Park\n",
    )
    .unwrap();

    let (config, source) = loader(&dir).discover(None).unwrap();
    assert_eq!(config.business.name, "Local Park");
    assert_eq!(source, ConfigSource::File(dir.path().join("work/jumpzone.yaml")));
}

#[test]
fn test_platform_file_used_when_no_local_file() {
    let dir = setup();
    let platform = JumpzonePaths::for_project(&dir.path().join("platform"));
    platform.ensure_directories().unwrap();
    fs::write(
        platform.config_file(),
        "booking:\n  submit_delay_ms: 10\n",
    )
    .unwrap();

    let (config, source) = loader(&dir).discover(None).unwrap();
    assert_eq!(source, ConfigSource::File(platform.config_file()));
    assert_eq!(config.booking.submit_delay_ms, 10);
    // Unset sections fall back to defaults
    assert_eq!(config.booking.reset_delay_ms, 400);
    assert_eq!(config.business.name, "JumpZone");
}

#[test]
fn test_override_replaces_shared_reference_data() {
    let dir = setup();
    let path = dir.path().join("site.yaml");
    fs::write(
        &path,
        r#"
business:
  name: Bounce Bay
  tagline: Jump higher
locations:
  - name: Bounce Bay Pune
    address: Baner Road, Pune
navigation:
  - label: Home
    path: /
  - label: Birthday Parties
    path: /birthday
"#,
    )
    .unwrap();

    let (config, source) = loader(&dir).discover(Some(&path)).unwrap();
    assert_eq!(source, ConfigSource::File(path));
    assert_eq!(config.business.name, "Bounce Bay");
    assert_eq!(config.locations.len(), 1);
    assert_eq!(config.locations[0].hours, "");
    assert_eq!(config.navigation[1].path, "/birthday");
}

#[test]
fn test_missing_override_is_an_error() {
    let dir = setup();
    let missing = dir.path().join("nope.yaml");
    let err = loader(&dir).discover(Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let dir = setup();
    fs::write(dir.path().join("work/jumpzone.yaml"), "locations: [oops").unwrap();
    let err = loader(&dir).discover(None).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_relative_navigation_path_is_rejected() {
    let dir = setup();
    fs::write(
        dir.path().join("work/jumpzone.yaml"),
        "navigation:\n  - label: Blog\n    path: blog\n",
    )
    .unwrap();
    let err = loader(&dir).discover(None).unwrap_err();
    assert!(err.to_string().contains("absolute path"));
}

#[test]
fn test_empty_business_name_is_rejected() {
    let dir = setup();
    fs::write(
        dir.path().join("work/jumpzone.yaml"),
        "business:\n  name: \"  \"\n",
    )
    .unwrap();
    assert!(loader(&dir).discover(None).is_err());
}
