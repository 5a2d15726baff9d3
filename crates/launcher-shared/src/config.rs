//! Configuration types for the launcher

use serde::{Deserialize, Serialize};

use crate::error::{LauncherError, Result};

/// Launcher configuration (launcher.json)
///
/// Every field is optional in the file; missing fields fall back to
/// the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LauncherConfig {
    /// Titles offered for purchase, in display order
    pub catalog: Vec<String>,

    /// Log filter used when `RUST_LOG` is not set (e.g. "info", "launcher=debug")
    pub log_filter: Option<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            catalog: vec!["Game1".to_string(), "Game2".to_string(), "Game3".to_string()],
            log_filter: None,
        }
    }
}

impl LauncherConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject catalogs nobody could buy from
    pub fn validate(&self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(LauncherError::Config("catalog must not be empty".to_string()));
        }
        if let Some(blank) = self.catalog.iter().position(|t| t.trim().is_empty()) {
            return Err(LauncherError::Config(format!(
                "catalog entry {} is blank",
                blank
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog() {
        let config = LauncherConfig::default();
        assert_eq!(config.catalog, vec!["Game1", "Game2", "Game3"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "catalog": ["Space Miner", "Cave Diver"],
            "logFilter": "debug"
        }"#;

        let config = LauncherConfig::from_json(json).unwrap();
        assert_eq!(config.catalog, vec!["Space Miner", "Cave Diver"]);
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = LauncherConfig::from_json("{}").unwrap();
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = LauncherConfig::from_json(r#"{ "catalog": [] }"#).unwrap_err();
        assert!(matches!(err, LauncherError::Config(_)));
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = LauncherConfig::from_json(r#"{ "catalog": ["Game1", "  "] }"#).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: catalog entry 1 is blank");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "catalog": ["Game7"] }}"#).unwrap();

        let config = LauncherConfig::from_file(file.path()).unwrap();
        assert_eq!(config.catalog, vec!["Game7"]);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LauncherConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LauncherError::Io(_)));
    }
}
