//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use way_config::WaymarkConfig;
use way_core::{Category, Severity};

#[test]
fn loads_engine_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[engine]
decision_data_usage_threshold = 0.6
parallel = true
fail_on = "high"
"#,
        )?;

        let config: WaymarkConfig = Figment::from(Serialized::defaults(WaymarkConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!((config.engine.decision_data_usage_threshold - 0.6).abs() < f64::EPSILON);
        assert!(config.engine.parallel);
        assert_eq!(config.engine.fail_on, Some(Severity::High));
        Ok(())
    });
}

#[test]
fn loads_enabled_categories_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[categories]
enabled = ["unhandled_sheet_kind", "dead_end_destination"]
"#,
        )?;

        let config: WaymarkConfig = Figment::from(Serialized::defaults(WaymarkConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        let effective = config.categories.effective();
        assert_eq!(effective.len(), 2);
        assert!(effective.contains(&Category::UnhandledSheetKind));
        assert!(effective.contains(&Category::DeadEndDestination));
        Ok(())
    });
}

#[test]
fn env_vars_override_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[engine]
parallel = false
decision_data_usage_threshold = 0.3
"#,
        )?;
        jail.set_env("WAYMARK_ENGINE__PARALLEL", "true");

        let config: WaymarkConfig = Figment::from(Serialized::defaults(WaymarkConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("WAYMARK_").split("__"))
            .extract()?;

        assert!(config.engine.parallel);
        assert!((config.engine.decision_data_usage_threshold - 0.3).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn defaults_apply_when_no_sources_set_values() {
    Jail::expect_with(|_jail| {
        let config: WaymarkConfig = Figment::from(Serialized::defaults(WaymarkConfig::default()))
            .extract()?;
        assert!((config.engine.decision_data_usage_threshold - 0.4).abs() < f64::EPSILON);
        assert!(config.categories.enabled.is_none());
        Ok(())
    });
}
