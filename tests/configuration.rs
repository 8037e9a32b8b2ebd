//! Tests for configuration system

use mealsync::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_defaults_without_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.child("missing.toml");

    let config = Config::load(Some(missing.to_string_lossy().into_owned()))?;

    assert!(config.planner.seed_recipes);
    assert_eq!(config.planner.weeks, 1);
    assert_eq!(config.planner.manual_label, "Manual Add");
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.observability.format, "pretty");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("mealsync.toml");
    std::fs::write(
        &path,
        r#"
[planner]
seed_recipes = false
weeks = 4

[observability]
format = "json"
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert!(!config.planner.seed_recipes);
    assert_eq!(config.planner.weeks, 4);
    assert_eq!(config.planner.manual_label, "Manual Add");
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.observability.format, "json");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_file_with_invalid_values_fails_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("mealsync.toml");
    std::fs::write(&path, "[planner]\nweeks = 60\n")?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert!(config.validate().is_err());

    Ok(())
}
