use crate::placement::{PlacementOptions, StrategyName};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct PlacementConfig {
    pub strategy: StrategyName,
    pub gap: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyName::Bottom,
            gap: 0.0,
        }
    }
}

impl PlacementConfig {
    pub fn options(&self) -> PlacementOptions {
        PlacementOptions { gap: self.gap }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub placement: PlacementConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    strategy: Option<String>,
    gap: Option<f32>,
}

/// Load defaults, overridden by the JSON5 file at `path` when given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    apply_config_file(&mut config, &contents)?;
    Ok(config)
}

fn apply_config_file(config: &mut Config, contents: &str) -> anyhow::Result<()> {
    let parsed: ConfigFile = json5::from_str(contents)?;

    if let Some(name) = parsed.strategy.as_deref() {
        config.placement.strategy = name.parse()?;
    }
    if let Some(v) = parsed.gap {
        config.placement.gap = v;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.placement.strategy, StrategyName::Bottom);
        assert_eq!(config.placement.gap, 0.0);
    }

    #[test]
    fn file_overrides_defaults() {
        let mut config = Config::default();
        apply_config_file(
            &mut config,
            r#"{
                // dropdowns open to the right
                strategy: "right top",
                gap: 4,
            }"#,
        )
        .unwrap();
        assert_eq!(config.placement.strategy, StrategyName::RightTop);
        assert_eq!(config.placement.options().gap, 4.0);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut config = Config::default();
        apply_config_file(&mut config, r#"{"gap": 6.5}"#).unwrap();
        assert_eq!(config.placement.strategy, StrategyName::Bottom);
        assert_eq!(config.placement.gap, 6.5);
    }

    #[test]
    fn unknown_strategy_in_file_is_an_error() {
        let mut config = Config::default();
        let err = apply_config_file(&mut config, r#"{"strategy": "upward"}"#).unwrap_err();
        assert!(err.to_string().contains("upward"));
    }

    #[test]
    fn load_config_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "popover-placement-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"strategy": "top", "gap": 2}"#).unwrap();
        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.placement.strategy, StrategyName::Top);
        assert_eq!(config.placement.gap, 2.0);
    }
}
