//! TOML-based strand configuration.
//!
//! Holds the values every conversion needs:
//! - Work-day window (minutes after midnight)
//! - Conflict color
//! - All-day tracking switch
//!
//! The configuration is an explicit value handed to each conversion call.
//! It is stored at `~/.config/weekstrand/config.toml` unless
//! `WEEKSTRAND_CONFIG` points elsewhere.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::ColorKey;
use crate::error::ConfigError;
use crate::geometry::DAY_IN_MINUTES;

/// Configuration for one strand conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrandConfig {
    /// Start of the work day, minutes after midnight.
    #[serde(default = "default_work_day_start")]
    pub work_day_start: u32,
    /// End of the work day, minutes after midnight.
    #[serde(default = "default_work_day_end")]
    pub work_day_end: u32,
    /// Color used for time covered by more than one event.
    #[serde(default = "default_conflict_color")]
    pub conflict_color: ColorKey,
    /// Collect all-day events into per-day colors instead of segments.
    #[serde(default)]
    pub track_all_day: bool,
}

// Default functions
fn default_work_day_start() -> u32 {
    6 * 60
}
fn default_work_day_end() -> u32 {
    20 * 60
}
fn default_conflict_color() -> ColorKey {
    ColorKey::BLACK
}

impl Default for StrandConfig {
    fn default() -> Self {
        Self {
            work_day_start: default_work_day_start(),
            work_day_end: default_work_day_end(),
            conflict_color: default_conflict_color(),
            track_all_day: false,
        }
    }
}

impl StrandConfig {
    /// Length of the work day in minutes.
    pub fn work_day_minutes(&self) -> u32 {
        self.work_day_end.saturating_sub(self.work_day_start)
    }

    /// Minutes between the end of the work day and midnight.
    pub fn work_day_end_length(&self) -> u32 {
        DAY_IN_MINUTES.saturating_sub(self.work_day_end)
    }

    /// Check that the work-day window is usable for pixel mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the window is empty or does
    /// not fit inside one day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.work_day_end > DAY_IN_MINUTES {
            return Err(ConfigError::InvalidValue {
                key: "work_day_end".into(),
                message: format!("{} is past the end of the day", self.work_day_end),
            });
        }
        if self.work_day_start >= self.work_day_end {
            return Err(ConfigError::InvalidValue {
                key: "work_day_start".into(),
                message: format!(
                    "{} must be before work_day_end ({})",
                    self.work_day_start, self.work_day_end
                ),
            });
        }
        Ok(())
    }

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
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
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

    /// Default location of the config file.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("WEEKSTRAND_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("weekstrand")
            .join("config.toml")
    }

    /// Load from `path`, or return the default when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the parsed values fail [`StrandConfig::validate`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        let cfg: StrandConfig = toml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Persist to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
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

    /// Set a config value by key. The result is validated before it replaces
    /// `self`; nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed, or
    /// the resulting configuration is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: StrandConfig =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}
