//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No business logic or policies**
//! ❌ **No validation logic**
//! ❌ **No default value calculation**
//!
//! Missing or zero values are facts. Defaults are resolved by the policy
//! types in the application layer.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Data directory override (may be empty - the platform default is used then)
    pub data_dir: PathBuf,

    /// Local export of the backend task history
    pub task_export_path: PathBuf,

    /// Analytics lookback window in days
    pub lookback_days: u32,

    pub tutorial: TutorialConfig,
}

/// Tutorial spotlight timings and scroll thresholds (raw values)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TutorialConfig {
    pub settle_delay_ms: u64,
    pub scroll_settle_delay_ms: u64,
    pub retry_delay_ms: u64,
    pub max_measure_retries: u32,
    pub near_top_threshold: f64,
    pub near_bottom_threshold: f64,
    pub focus_fraction: f64,
}

fn get<'a>(value: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    value.get(section).and_then(|s| s.get(key))
}

fn get_u64(value: &toml::Value, section: &str, key: &str) -> u64 {
    get(value, section, key)
        .and_then(|v| v.as_integer())
        .unwrap_or(0)
        .max(0) as u64
}

fn get_u32(value: &toml::Value, section: &str, key: &str) -> u32 {
    u32::try_from(get_u64(value, section, key)).unwrap_or(u32::MAX)
}

fn get_f64(value: &toml::Value, section: &str, key: &str) -> f64 {
    get(value, section, key)
        .and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)))
        .unwrap_or(0.0)
}

fn get_path(value: &toml::Value, section: &str, key: &str) -> PathBuf {
    PathBuf::from(get(value, section, key).and_then(|v| v.as_str()).unwrap_or(""))
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings and zeros are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_dir: get_path(toml_value, "general", "data_dir"),
            task_export_path: get_path(toml_value, "tasks", "export_path"),
            lookback_days: get_u32(toml_value, "analytics", "lookback_days"),
            tutorial: TutorialConfig {
                settle_delay_ms: get_u64(toml_value, "tutorial", "settle_delay_ms"),
                scroll_settle_delay_ms: get_u64(toml_value, "tutorial", "scroll_settle_delay_ms"),
                retry_delay_ms: get_u64(toml_value, "tutorial", "retry_delay_ms"),
                max_measure_retries: get_u32(toml_value, "tutorial", "max_measure_retries"),
                near_top_threshold: get_f64(toml_value, "tutorial", "near_top_threshold"),
                near_bottom_threshold: get_f64(toml_value, "tutorial", "near_bottom_threshold"),
                focus_fraction: get_f64(toml_value, "tutorial", "focus_fraction"),
            },
        })
    }

    /// Create empty AppConfig (all empty/zero values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            task_export_path: PathBuf::new(),
            lookback_days: 0,
            tutorial: TutorialConfig::default(),
        }
    }
}
