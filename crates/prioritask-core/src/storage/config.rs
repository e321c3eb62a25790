//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Scoring parameters (scale factor, thresholds, urgency mode, formula)
//! - Task store location
//!
//! Configuration is stored at `~/.config/prioritask/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::scoring::{ScoringConfig, ScoringEngine};

/// Task store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// File name inside the data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/prioritask/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_file_name() -> String {
    "tasks.json".into()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds invalid scoring values, or if the defaults cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.engine()?;
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }),
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Validated scoring engine for this configuration.
    pub fn engine(&self) -> Result<ScoringEngine, ConfigError> {
        ScoringEngine::new(&self.scoring)
    }

    /// Path of the task store file.
    pub fn store_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join(&self.store.file_name))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving. The result must still
    /// produce a valid scoring engine, which is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// or is out of range.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<ScoringEngine, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        let engine = updated.engine()?;
        *self = updated;
        Ok(engine)
    }

    /// Set a config value by key and save. Returns the rebuilt engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<ScoringEngine, ConfigError> {
        let engine = self.apply(key, value)?;
        self.save()?;
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{PriorityFormula, UrgencyMode};
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let parsed: Config = toml::from_str("[scoring]\nformula = \"weighted\"\n").unwrap();
        assert_eq!(parsed.scoring.formula, PriorityFormula::Weighted);
        assert_eq!(parsed.scoring.scale_factor, 1.4);
        assert_eq!(parsed.store.file_name, "tasks.json");
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("scoring.scale_factor").as_deref(), Some("1.4"));
        assert_eq!(cfg.get("scoring.urgency_mode").as_deref(), Some("deadline"));
        assert_eq!(cfg.get("store.file_name").as_deref(), Some("tasks.json"));
        assert!(cfg.get("scoring.missing_key").is_none());
    }

    #[test]
    fn apply_updates_enum_and_number() {
        let mut cfg = Config::default();
        cfg.apply("scoring.urgency_mode", "blended").unwrap();
        cfg.apply("scoring.deadline_weight", "0.5").unwrap();
        assert_eq!(cfg.scoring.urgency_mode, UrgencyMode::Blended);
        assert_eq!(cfg.scoring.deadline_weight, 0.5);
    }

    #[test]
    fn apply_returns_rebuilt_engine() {
        let mut cfg = Config::default();
        let engine = cfg.apply("scoring.formula", "weighted").unwrap();
        assert_eq!(engine.formula(), PriorityFormula::Weighted);
        assert_eq!(engine.urgency_mode(), UrgencyMode::Deadline);

        let engine = cfg.apply("scoring.scale_factor", "2").unwrap();
        assert_eq!(engine.scale().scale_factor(), 2.0);
        assert_eq!(engine.scale().limit(), 480);
        assert_eq!(engine.formula(), PriorityFormula::Weighted);
    }

    #[test]
    fn apply_accepts_integer_for_float_field() {
        let mut cfg = Config::default();
        cfg.apply("scoring.scale_factor", "2").unwrap();
        assert_eq!(cfg.scoring.scale_factor, 2.0);
    }

    #[test]
    fn apply_updates_threshold_array() {
        let mut cfg = Config::default();
        cfg.apply(
            "scoring.difficulty_thresholds",
            "[5, 15, 30, 45, 60, 90, 120, 240, 360, 600]",
        )
        .unwrap();
        assert_eq!(cfg.scoring.difficulty_thresholds[9], 600);
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.apply("scoring.nonexistent_key", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(cfg.apply("", "1").is_err());
    }

    #[test]
    fn apply_rejects_invalid_values_without_change() {
        let mut cfg = Config::default();
        assert!(cfg.apply("scoring.urgency_mode", "panic").is_err());
        assert!(cfg.apply("scoring.deadline_weight", "3").is_err());
        assert!(cfg.apply("scoring.scale_factor", "fast").is_err());
        assert!(cfg
            .apply("scoring.difficulty_thresholds", "[1, 2, 3]")
            .is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_writes_defaults_on_first_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn load_from_rejects_invalid_scoring() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nscale_factor = 0.0\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.apply("scoring.formula", "weighted").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }
}
