//! Engine settings loaded from `settings.toml`
//!
//! Every section falls back to built-in defaults when the file is missing
//! or a key is omitted, so a bare checkout runs without any configuration.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Settings loading errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root settings structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct EngineSettings {
    /// Application identity reported to the graphics driver
    pub app: AppSettings,

    /// Window configuration
    pub window: WindowSettings,

    /// Development/debug configuration
    pub debug: DebugSettings,
}

/// Application identity settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Application name
    pub name: String,

    /// Engine name
    pub engine: String,

    /// Application version as `[major, minor, patch]`
    pub app_version: [u32; 3],

    /// Engine version as `[major, minor, patch]`
    pub engine_version: [u32; 3],
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "Hello Triangle".to_string(),
            engine: "No Engine".to_string(),
            app_version: [1, 0, 0],
            engine_version: [1, 0, 0],
        }
    }
}

/// Window settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Whether the window can be resized
    pub resizable: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Vulkan Window".to_string(),
            width: 800,
            height: 600,
            resizable: false,
        }
    }
}

/// Development/debug settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DebugSettings {
    /// Request Vulkan validation layers (debug builds only)
    pub validation_layers: bool,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            validation_layers: true,
        }
    }
}

impl EngineSettings {
    /// Load settings from `settings.toml`, falling back to defaults
    pub fn load() -> Self {
        Self::load_from_path("settings.toml").unwrap_or_else(|e| {
            log::warn!("Failed to load settings.toml: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Load settings from a specific path
    ///
    /// A missing file is not an error; it yields the defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Settings file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)?;

        log::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_bringup_constants() {
        let settings = EngineSettings::default();

        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.window.title, "Vulkan Window");
        assert!(!settings.window.resizable, "Window should default to fixed size");
        assert!(settings.debug.validation_layers, "Validation should default to on");
        assert_eq!(settings.app.app_version, [1, 0, 0]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: EngineSettings = toml::from_str(
            r#"
            [window]
            width = 1280
            height = 720
            "#,
        )
        .expect("partial settings should parse");

        assert_eq!(settings.window.width, 1280);
        assert_eq!(settings.window.height, 720);
        // Untouched sections keep their defaults
        assert_eq!(settings.window.title, "Vulkan Window");
        assert_eq!(settings.app.name, "Hello Triangle");
        assert!(settings.debug.validation_layers);
    }

    #[test]
    fn test_full_override() {
        let settings: EngineSettings = toml::from_str(
            r#"
            [app]
            name = "Demo"
            engine = "Render Engine"
            app_version = [0, 2, 1]
            engine_version = [0, 1, 0]

            [window]
            title = "Demo Window"
            width = 640
            height = 480
            resizable = true

            [debug]
            validation_layers = false
            "#,
        )
        .expect("full settings should parse");

        assert_eq!(settings.app.name, "Demo");
        assert_eq!(settings.app.app_version, [0, 2, 1]);
        assert_eq!(settings.window.title, "Demo Window");
        assert!(settings.window.resizable);
        assert!(!settings.debug.validation_layers);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = EngineSettings::load_from_path("does/not/exist/settings.toml")
            .expect("missing file should not be an error");
        assert_eq!(settings.window.width, 800);
    }
}
