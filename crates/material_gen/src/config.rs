//! Export configuration
//!
//! Explicit configuration passed into the builder, replacing the fixed
//! module-level settings of the earlier export scripts. Profiles can be
//! loaded from TOML or RON files.

use serde::{Deserialize, Serialize};

use crate::descriptor::TurbulenceParams;

/// Naming conventions and effect constants for one export run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Recognized texture file extension, including the leading dot.
    pub texture_extension: String,

    /// Suffix inserted before the extension to name a fullbright companion.
    pub fullbright_suffix: String,

    /// Seconds each animation frame stays on screen.
    pub animation_frame_duration: f32,

    /// Turbulence attached to `*`-prefixed surfaces.
    pub turbulence: TurbulenceParams,

    /// Substring marking a turbulent surface as liquid (case-sensitive).
    pub liquid_keyword: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            texture_extension: ".tga".to_string(),
            fullbright_suffix: "_fb".to_string(),
            animation_frame_duration: 0.5,
            turbulence: TurbulenceParams::default(),
            liquid_keyword: "WATER".to_string(),
        }
    }
}

impl ExportConfig {
    /// Load a configuration profile from file, format chosen by extension.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_legacy_conventions() {
        let config = ExportConfig::default();

        assert_eq!(config.texture_extension, ".tga");
        assert_eq!(config.fullbright_suffix, "_fb");
        assert_eq!(config.animation_frame_duration, 0.5);
        assert_eq!(config.turbulence.amplitude, 4.0);
        assert_eq!(config.turbulence.wave_length, 64.0);
        assert_eq!(config.turbulence.frequency, 0.1875);
        assert_eq!(config.liquid_keyword, "WATER");
    }

    #[test]
    fn test_partial_toml_profile_keeps_defaults() {
        let profile = r#"
            texture_extension = ".png"
            liquid_keyword = "SLIME"
        "#;

        let config: ExportConfig = toml::from_str(profile).unwrap();
        assert_eq!(config.texture_extension, ".png");
        assert_eq!(config.liquid_keyword, "SLIME");
        // Untouched fields fall back to the legacy defaults
        assert_eq!(config.fullbright_suffix, "_fb");
        assert_eq!(config.animation_frame_duration, 0.5);
    }

    #[test]
    fn test_unknown_profile_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.yaml");
        std::fs::write(&path, "texture_extension: .png").unwrap();

        let result = ExportConfig::load_from_file(path.to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_ron_profile_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.ron");
        std::fs::write(&path, "(animation_frame_duration: 0.25)").unwrap();

        let config = ExportConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.animation_frame_duration, 0.25);
        assert_eq!(config.texture_extension, ".tga");
    }
}
