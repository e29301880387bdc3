use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::highlights::HighlightError;

/// Thresholds and weights for one engine instance.
///
/// Missing keys fall back to their defaults. Both the snake_case names and
/// the camelCase names used by older config files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    #[serde(alias = "clutchThresholdSeconds", alias = "clutch_threshold_secs")]
    pub clutch_threshold_seconds: u32,
    #[serde(alias = "hotStreakWindowSeconds", alias = "hot_streak_window_secs")]
    pub hot_streak_window_seconds: u32,
    #[serde(alias = "momentumRunThreshold")]
    pub momentum_run_threshold: u32,
    #[serde(alias = "defensiveImpactThreshold")]
    pub defensive_impact_threshold: u32,
    #[serde(alias = "impactScores")]
    pub impact_scores: ImpactScores,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            clutch_threshold_seconds: 30,
            hot_streak_window_seconds: 120,
            momentum_run_threshold: 10,
            defensive_impact_threshold: 3,
            impact_scores: ImpactScores::default(),
        }
    }
}

/// Weights used by the general impact scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactScores {
    #[serde(alias = "threePointer")]
    pub three_pointer: i32,
    #[serde(alias = "twoPointer")]
    pub two_pointer: i32,
    pub block: i32,
    pub steal: i32,
    #[serde(alias = "clutchBonus")]
    pub clutch_bonus: i32,
    #[serde(alias = "streakBonus")]
    pub streak_bonus: i32,
    #[serde(alias = "momentumBonus")]
    pub momentum_bonus: i32,
    #[serde(alias = "closeGameBonus")]
    pub close_game_bonus: i32,
    #[serde(alias = "fourthQuarterBonus")]
    pub fourth_quarter_bonus: i32,
}

impl Default for ImpactScores {
    fn default() -> Self {
        Self {
            three_pointer: 3,
            two_pointer: 2,
            block: 1,
            steal: 1,
            clutch_bonus: 5,
            streak_bonus: 5,
            momentum_bonus: 5,
            close_game_bonus: 5,
            fourth_quarter_bonus: 5,
        }
    }
}

impl EngineConfig {
    pub fn from_value(value: serde_json::Value) -> Result<Self, HighlightError> {
        serde_json::from_value(value).map_err(|err| HighlightError::Configuration(err.to_string()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, HighlightError> {
        serde_json::from_str(raw).map_err(|err| HighlightError::Configuration(err.to_string()))
    }

    /// Reads a JSON config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HighlightError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            HighlightError::Configuration(format!("cannot read {}: {}", path.display(), err))
        })?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_uses_defaults() {
        let config = EngineConfig::from_value(json!({})).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.impact_scores.fourth_quarter_bonus, 5);
    }

    #[test]
    fn accepts_camel_case_keys() {
        let config = EngineConfig::from_value(json!({
            "clutchThresholdSeconds": 45,
            "momentumRunThreshold": 8,
            "impactScores": { "threePointer": 15, "block": 12 }
        }))
        .unwrap();

        assert_eq!(config.clutch_threshold_seconds, 45);
        assert_eq!(config.momentum_run_threshold, 8);
        assert_eq!(config.hot_streak_window_seconds, 120);
        assert_eq!(config.impact_scores.three_pointer, 15);
        assert_eq!(config.impact_scores.block, 12);
        assert_eq!(config.impact_scores.steal, 1);
    }

    #[test]
    fn accepts_legacy_second_suffixes() {
        let config = EngineConfig::from_json_str(
            r#"{"clutch_threshold_secs": 20, "hot_streak_window_secs": 90}"#,
        )
        .unwrap();

        assert_eq!(config.clutch_threshold_seconds, 20);
        assert_eq!(config.hot_streak_window_seconds, 90);
    }

    #[test]
    fn wrong_type_is_configuration_error() {
        let result = EngineConfig::from_value(json!({ "momentum_run_threshold": "ten" }));
        assert!(matches!(result, Err(HighlightError::Configuration(_))));

        let result = EngineConfig::from_value(json!({ "impact_scores": { "steal": [1] } }));
        assert!(matches!(result, Err(HighlightError::Configuration(_))));
    }

    #[test]
    fn loads_config_from_file() {
        let path = std::env::temp_dir()
            .join(format!("highlights-config-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"{"hotStreakWindowSeconds": 90, "impact_scores": {"steal": 4}}"#,
        )
        .unwrap();

        let result = EngineConfig::load(&path);
        std::fs::remove_file(&path).unwrap();

        let config = result.unwrap();
        assert_eq!(config.hot_streak_window_seconds, 90);
        assert_eq!(config.impact_scores.steal, 4);
        assert_eq!(config.clutch_threshold_seconds, 30);
    }

    #[test]
    fn missing_file_is_configuration_error() {
        let result = EngineConfig::load("/definitely/not/here/taggingConfig.json");
        assert!(matches!(result, Err(HighlightError::Configuration(_))));
    }
}
