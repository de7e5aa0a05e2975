//! Library configuration loaded from `config.json`.

use crate::resize::{PanelResizer, PanelWidth};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid panel bounds: min {min} is greater than max {max}")]
    InvalidPanelBounds { min: f64, max: f64 },
}

/// Panel sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub initial_width: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            initial_width: 280.0,
            min_width: 200.0,
            max_width: 500.0,
        }
    }
}

/// Settings for the element library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub panel: PanelConfig,
    /// Prefix of image cache keys.
    pub cache_namespace: String,
    /// Seed the image library with sample images at startup.
    pub seed_sample_images: bool,
    /// Fill color used for newly inserted shapes.
    pub default_shape_color: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            panel: PanelConfig::default(),
            cache_namespace: "chronocanvas".to_string(),
            seed_sample_images: true,
            default_shape_color: "#3b82f6".to_string(),
        }
    }
}

impl LibraryConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Check panel bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let PanelConfig { min_width, max_width, .. } = self.panel;
        if !(min_width <= max_width) {
            return Err(ConfigError::InvalidPanelBounds {
                min: min_width,
                max: max_width,
            });
        }
        Ok(())
    }

    /// Resizer for the configured panel.
    pub fn panel_resizer(&self) -> Result<PanelResizer, ConfigError> {
        let width = PanelWidth::new(self.panel.initial_width, self.panel.min_width, self.panel.max_width)
            .map_err(|_| ConfigError::InvalidPanelBounds {
                min: self.panel.min_width,
                max: self.panel.max_width,
            })?;
        Ok(PanelResizer::new(width))
    }
}

/// Path to the config file.
///
/// - Linux: `~/.config/chronocanvas/config.json`
/// - Windows/macOS: the platform config directory
/// - Fallback: `./config.json`
#[cfg(not(target_arch = "wasm32"))]
pub fn config_file() -> std::path::PathBuf {
    dirs::config_dir()
        .map(|p| p.join("chronocanvas").join("config.json"))
        .unwrap_or_else(|| std::path::PathBuf::from("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = LibraryConfig::default();
        assert_eq!(config.panel.initial_width, 280.0);
        assert_eq!(config.cache_namespace, "chronocanvas");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = LibraryConfig::from_json(r#"{"panel": {"max_width": 640}}"#).unwrap();
        assert_eq!(config.panel.max_width, 640.0);
        assert_eq!(config.panel.min_width, 200.0);
        assert!(config.seed_sample_images);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let result = LibraryConfig::from_json(r#"{"panel": {"min_width": 600, "max_width": 300}}"#);
        assert!(matches!(result, Err(ConfigError::InvalidPanelBounds { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let config = LibraryConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, LibraryConfig::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"cache_namespace": "studio", "seed_sample_images": false}"#).unwrap();

        let config = LibraryConfig::load(&path).unwrap();
        assert_eq!(config.cache_namespace, "studio");
        assert!(!config.seed_sample_images);
    }

    #[test]
    fn test_panel_resizer() {
        let resizer = LibraryConfig::default().panel_resizer().unwrap();
        assert_eq!(resizer.width(), 280.0);
        assert_eq!(resizer.bounds().max(), 500.0);
    }
}
