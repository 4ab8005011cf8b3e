use figment::Jail;
use insight_config::InsightConfig;
use insight_core::ShapeMode;
use serde_json::json;

#[test]
fn env_sets_validation_mode() {
    Jail::expect_with(|jail| {
        jail.set_env("INSIGHT_VALIDATION__MODE", "closed");

        let config = InsightConfig::load().expect("config loads");
        assert_eq!(config.validation.mode, ShapeMode::Closed);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".insight")?;
        jail.create_file(".insight/config.toml", "[general]\npretty = true\n")?;
        jail.set_env("INSIGHT_GENERAL__PRETTY", "false");

        let config = InsightConfig::load().expect("config loads");
        assert!(!config.general.pretty);
        Ok(())
    });
}

#[test]
fn env_kind_list_flows_into_policy() {
    Jail::expect_with(|jail| {
        jail.set_env("INSIGHT_VALIDATION__ALLOWED_KINDS", "[track]");

        let config = InsightConfig::load().expect("config loads");
        let policy = config.validation.policy();
        assert!(policy.accepts(&json!({"type": "track", "event": "e", "data": {}})));
        assert!(!policy.accepts(&json!({"type": "page", "event": "e", "data": {}})));
        Ok(())
    });
}
