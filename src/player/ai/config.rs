use crate::error::ConfigError;
use crate::player::ai::pst::{PositionTable, DEFAULT_WEIGHTS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "ai_config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    /// 重みテーブル (row 0 = 上端)
    pub weights: Vec<Vec<i32>>,
    /// 固定シード (None ならエントロピーから)
    #[serde(default)]
    pub seed: Option<u64>,
    /// UI 側でAIの着手前に待つ時間
    #[serde(default = "default_think_delay_ms")]
    pub think_delay_ms: u64,
    #[serde(default = "default_selfplay_games")]
    pub selfplay_games: usize,
}

fn default_think_delay_ms() -> u64 {
    1000
}

fn default_selfplay_games() -> usize {
    100
}

impl AIConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(ConfigError::FileRead { .. }) => Self::default(),
            Err(e) => {
                warn!("ignoring {}: {}", DEFAULT_CONFIG_PATH, e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let table = self.position_table()?;
        if table.width() != 8 || table.height() != 8 {
            return Err(ConfigError::Validation(format!(
                "weight table must be 8x8, got {}x{}",
                table.width(),
                table.height()
            )));
        }
        Ok(())
    }

    pub fn position_table(&self) -> Result<PositionTable, ConfigError> {
        PositionTable::from_rows(&self.weights)
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            weights: DEFAULT_WEIGHTS.iter().map(|row| row.to_vec()).collect(),
            seed: None,
            think_delay_ms: default_think_delay_ms(),
            selfplay_games: default_selfplay_games(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AIConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.position_table().unwrap(), PositionTable::standard());
    }

    #[test]
    fn test_parse_with_defaults() {
        let mut json = serde_json::to_value(AIConfig::default()).unwrap();
        let obj = json.as_object_mut().unwrap();
        obj.remove("think_delay_ms");
        obj.insert("seed".to_string(), serde_json::json!(42));
        let config: AIConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.think_delay_ms, 1000);
    }

    #[test]
    fn test_wrong_size_table_is_rejected() {
        let config = AIConfig {
            weights: vec![vec![1; 8]; 7],
            ..AIConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AIConfig::load_from("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("reversi_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ai_config.json");
        let config = AIConfig {
            seed: Some(7),
            ..AIConfig::default()
        };
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = AIConfig::load_from(&path).unwrap();
        assert_eq!(loaded.seed, Some(7));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
