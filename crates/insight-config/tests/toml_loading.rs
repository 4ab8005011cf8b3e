//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use insight_config::{ConfigError, InsightConfig};
use insight_core::ShapeMode;
use pretty_assertions::assert_eq;

#[test]
fn loads_validation_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[validation]
mode = "closed"
allowed_kinds = ["track", "identify"]
"#,
        )?;

        let config: InsightConfig = Figment::from(Serialized::defaults(InsightConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.validation.mode, ShapeMode::Closed);
        assert_eq!(config.validation.allowed_kinds, vec!["track", "identify"]);
        assert!(config.general.pretty);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".insight")?;
        jail.create_file(
            ".insight/config.toml",
            r#"
[validation]
mode = "closed"

[general]
pretty = false
"#,
        )?;

        let config = InsightConfig::load().expect("config loads");
        assert_eq!(config.validation.mode, ShapeMode::Closed);
        assert!(!config.general.pretty);
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_project_config() {
    Jail::expect_with(|jail| {
        jail.create_dir(".insight")?;
        jail.create_file(".insight/config.toml", "[validation]\nmode = \"closed\"\n")?;
        jail.create_file("override.toml", "[validation]\nmode = \"open\"\n")?;

        let config = InsightConfig::load_with_file("override.toml".as_ref()).expect("config loads");
        assert_eq!(config.validation.mode, ShapeMode::Open);
        Ok(())
    });
}

#[test]
fn unknown_mode_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[validation]\nmode = \"strict\"\n")?;

        let result = InsightConfig::load_with_file("config.toml".as_ref());
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn blank_kind_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[validation]\nallowed_kinds = [\"track\", \"\"]\n")?;

        let result = InsightConfig::load_with_file("config.toml".as_ref());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = InsightConfig::load_with_file("does-not-exist.toml".as_ref());
        assert!(matches!(
            result,
            Err(ConfigError::FileNotFound(ref path)) if path.ends_with("does-not-exist.toml")
        ));
        Ok(())
    });
}

#[test]
fn explicit_file_is_not_searched_in_parent_dirs() {
    Jail::expect_with(|jail| {
        jail.create_file("strict.toml", "[validation]\nmode = \"closed\"\n")?;
        jail.create_dir("sub")?;
        jail.change_dir("sub")?;

        let result = InsightConfig::load_with_file("strict.toml".as_ref());
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
        Ok(())
    });
}
