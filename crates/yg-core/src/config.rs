//! Grid configuration

use std::path::Path;
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::bridge::{KeyCode, KeyMap};
use crate::date_range::DateBound;
use crate::navigation::DEFAULT_COLUMNS;
use crate::{GridError, Result};

/// Configuration for a year grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Years per row, used for Up/Down moves
    pub columns: usize,

    /// Whether activation keys commit the focused year
    pub keyboard_commit: bool,

    /// Keys that activate the focused year
    pub activation_keys: Vec<KeyCode>,

    /// Request a scroll to the selected year whenever host data changes
    pub scroll_on_update: bool,

    /// Lower bound used when the host has none
    pub min_date: DateBound,

    /// Upper bound used when the host has none
    pub max_date: DateBound,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            keyboard_commit: true,
            activation_keys: vec![KeyCode::Enter, KeyCode::Space],
            scroll_on_update: true,
            min_date: DateBound::min_date(),
            max_date: DateBound::max_date(),
        }
    }
}

impl GridConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GridConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading grid config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(GridError::Config("columns must be at least 1".to_string()));
        }
        if self.min_date > self.max_date {
            return Err(GridError::Config(format!(
                "min_date {} is after max_date {}",
                self.min_date, self.max_date
            )));
        }
        Ok(())
    }

    /// Keyboard mapping described by this configuration
    pub fn keymap(&self) -> KeyMap {
        KeyMap {
            keyboard_commit: self.keyboard_commit,
            activation_keys: self.activation_keys.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config = GridConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GridConfig::default());
        assert_eq!(config.keymap(), KeyMap::default());
    }

    #[test]
    fn test_partial_json() {
        let config = GridConfig::from_json_str(
            r#"{ "columns": 4, "keyboard_commit": false, "min_date": "2000-01-01" }"#,
        )
        .unwrap();

        assert_eq!(config.columns, 4);
        assert!(!config.keymap().keyboard_commit);
        assert_eq!(config.min_date, DateBound::from_ymd(2000, 1, 1).unwrap());
        assert_eq!(config.max_date, DateBound::max_date());
    }

    #[test]
    fn test_round_trip() {
        let config = GridConfig { columns: 5, ..GridConfig::default() };
        let json = config.to_json_string().unwrap();
        assert_eq!(GridConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(matches!(
            GridConfig::from_json_str(r#"{ "columns": 0 }"#),
            Err(GridError::Config(_))
        ));
        assert!(matches!(
            GridConfig::from_json_str(r#"{ "min_date": "2030-01-01", "max_date": "2020-01-01" }"#),
            Err(GridError::Config(_))
        ));
        assert!(matches!(GridConfig::from_json_str("{ nope"), Err(GridError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GridConfig::load("/nonexistent/yeargrid.json");
        assert!(matches!(result, Err(GridError::Io(_))));
    }
}
