use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::stack::{Capabilities, StackOptions, StackPreset};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Start from a named preset; fields in `[stack]` are ignored when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<StackPreset>,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub stack: StackOptions,
    #[serde(default)]
    pub platform: PlatformConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Whether the host can render blur effects at all
    #[serde(default = "default_true")]
    pub blur_supported: bool,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            blur_supported: default_true(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config = Self::from_toml_str(&content)?;
            tracing::debug!("Loaded configuration from {}", path.display());
            Ok(config)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.stack.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn to_toml_string(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/cardstack/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("cardstack")
            .join("config.toml")
    }

    /// Options the engine should run with: the preset if one is named, else `[stack]`
    pub fn stack_options(&self) -> StackOptions {
        match self.preset {
            Some(preset) => preset.options(),
            None => self.stack.clone(),
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            blur_supported: self.platform.blur_supported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.general.log_level, "info");
        assert!(config.platform.blur_supported);
    }

    #[test]
    fn test_sections_parse() {
        let config = AppConfig::from_toml_str(
            r#"
            [general]
            log_level = "debug"

            [stack]
            max_stack_size = 6
            reverse = true
            stack_position = { x = 1.0, y = 0.0 }

            [platform]
            blur_supported = false
            "#,
        )
        .unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.stack.max_stack_size, 6);
        assert!(config.stack.reverse);
        assert_eq!(config.stack.stack_position.x, 1.0);
        assert!(!config.capabilities().blur_supported);
    }

    #[test]
    fn test_preset_overrides_stack() {
        let config = AppConfig::from_toml_str(
            r#"
            preset = "vortex"

            [stack]
            scale_factor = 0.9
            "#,
        )
        .unwrap();
        assert_eq!(config.stack_options(), StackPreset::Vortex.options());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [stack]
            min_scale = 0.9
            max_scale = 0.2
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));

        assert!(AppConfig::from_toml_str("[stack]\nshadow_color = \"#zz\"").is_err());
        assert!(AppConfig::from_toml_str("preset = \"wobble\"").is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("cardstack-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = AppConfig::default();
        config.stack.min_scale = Some(0.4);
        config.stack.shadow_enabled = true;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("cardstack-does-not-exist/config.toml");
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }
}
