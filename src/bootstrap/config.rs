//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - ✅ Read TOML configuration files
//! - ✅ Parse TOML into AppConfig DTO
//! - ✅ Report I/O and parsing errors with context
//!
//! ## Prohibited
//!
//! ❌ **No validation logic**
//! ❌ **No default value logic**
//!
//! > **Pure data loading only. Accept whatever is in the file.**

use std::path::Path;

use anyhow::Context;
use dm_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// A missing file is not an error: the app runs on an empty config and the
/// application layer fills in defaults. Nothing is logged here since this
/// runs before the tracing subscriber exists.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read, or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        return Ok(AppConfig::empty());
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [general]
            data_dir = "/srv/domani"

            [tasks]
            export_path = "export/tasks.json"

            [analytics]
            lookback_days = 30

            [tutorial]
            settle_delay_ms = 500
            focus_fraction = 0.3
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/domani"));
        assert_eq!(config.task_export_path, PathBuf::from("export/tasks.json"));
        assert_eq!(config.lookback_days, 30);
        assert_eq!(config.tutorial.settle_delay_ms, 500);
        assert_eq!(config.tutorial.focus_fraction, 0.3);
        assert_eq!(config.tutorial.retry_delay_ms, 0);
    }

    #[test]
    fn test_load_config_returns_empty_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();

        let config = load_config(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_load_config_returns_error_on_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[general\ndata_dir = ").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }
}
