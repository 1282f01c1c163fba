//! Configuration and profile loading for promptpack.
//!
//! Loads settings from `~/.promptpack/config.yaml` (or `$PROMPTPACK_CONFIG`)
//! with environment variable overrides, and named profiles from a separate
//! YAML document with a required top-level `profiles` key. Both documents may
//! carry free-form keys beyond the typed fields; those survive in `extra`.

use promptpack_core::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

/// Configuration loading errors.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config {
            message: e.to_string(),
        }
    }
}

/// The root configuration structure.
///
/// Maps to `~/.promptpack/config.yaml`. Unknown keys land in `extra`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the completion endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the completion endpoint (OpenAI-compatible)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Default model
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Default max tokens per response
    #[serde(default = "default_max_tokens")]
    pub default_max_tokens: u32,

    /// Default sampling temperature
    #[serde(default = "default_temperature")]
    pub default_temperature: f32,

    /// Whether the default model accepts a "system" role
    #[serde(default = "default_true")]
    pub supports_system_role: bool,

    /// Custom-instruction files or directories prepended to every prompt
    #[serde(default)]
    pub custom_instructions: Vec<PathBuf>,

    /// Curated-dataset files or directories supplied as prompt context
    #[serde(default)]
    pub curated_datasets: Vec<PathBuf>,

    /// Free-form keys owned by the surrounding application
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1".into()
}
fn default_model() -> String {
    "gpt-4o".into()
}
fn default_max_tokens() -> u32 {
    1000
}
fn default_temperature() -> f32 {
    0.75
}
fn default_true() -> bool {
    true
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("default_model", &self.default_model)
            .field("default_max_tokens", &self.default_max_tokens)
            .field("default_temperature", &self.default_temperature)
            .field("supports_system_role", &self.supports_system_role)
            .field("custom_instructions", &self.custom_instructions)
            .field("curated_datasets", &self.curated_datasets)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            default_model: default_model(),
            default_max_tokens: default_max_tokens(),
            default_temperature: default_temperature(),
            supports_system_role: true,
            custom_instructions: Vec::new(),
            curated_datasets: Vec::new(),
            extra: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `$PROMPTPACK_CONFIG` or the default path
    /// (~/.promptpack/config.yaml).
    ///
    /// Environment variables override file values for the API key
    /// (`PROMPTPACK_API_KEY`, then `OPENAI_API_KEY`, then
    /// `OPENROUTER_API_KEY`) and the default model (`PROMPTPACK_MODEL`).
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var("PROMPTPACK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::config_dir().join("config.yaml"));
        let mut config = Self::load_from(&config_path)?;

        if config.api_key.is_none() {
            config.api_key = std::env::var("PROMPTPACK_API_KEY")
                .ok()
                .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                .or_else(|| std::env::var("OPENROUTER_API_KEY").ok());
        }

        if let Ok(model) = std::env::var("PROMPTPACK_MODEL") {
            config.default_model = model;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".promptpack")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_temperature < 0.0 || self.default_temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "default_temperature must be between 0.0 and 2.0".into(),
            ));
        }
        if self.default_max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "default_max_tokens must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// A named profile — per-use-case overrides for model and context.
///
/// Unset fields fall back to the corresponding [`AppConfig`] value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_system_role: Option<bool>,

    #[serde(default)]
    pub custom_instructions: Vec<PathBuf>,

    #[serde(default)]
    pub curated_datasets: Vec<PathBuf>,

    /// Free-form keys owned by the surrounding application
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// On-disk shape of the profiles file: a required top-level `profiles` key.
#[derive(Debug, Deserialize)]
struct ProfilesFile {
    profiles: HashMap<String, Profile>,
}

/// Load named profiles from a YAML document.
///
/// A document without the top-level `profiles` key is a parse error, not a
/// panic.
pub fn load_profiles(path: &Path) -> Result<HashMap<String, Profile>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let file: ProfilesFile = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(file.profiles)
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_yaml(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config.default_model, "gpt-4o");
        assert!(config.supports_system_role);
        assert!(!config.has_api_key());
    }

    #[test]
    fn typed_and_free_form_keys_both_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_yaml(
            &dir,
            "config.yaml",
            "default_model: gpt-4o-mini\ndefault_max_tokens: 2000\nui_theme: dark\n",
        );

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.default_model, "gpt-4o-mini");
        assert_eq!(config.default_max_tokens, 2000);
        assert!(config.extra.contains_key("ui_theme"));
    }

    #[test]
    fn out_of_range_temperature_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_yaml(&dir, "config.yaml", "default_temperature: 3.5\n");

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_yaml(&dir, "config.yaml", "default_model: [unclosed\n");

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn profiles_load_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_yaml(
            &dir,
            "profiles.yaml",
            concat!(
                "profiles:\n",
                "  writer:\n",
                "    model: gpt-4o\n",
                "    temperature: 0.9\n",
                "    custom_instructions:\n",
                "      - ~/instructions/style.md\n",
                "  reviewer:\n",
                "    model: gpt-4o-mini\n",
                "    supports_system_role: false\n",
            ),
        );

        let profiles = load_profiles(&path).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles["writer"].model.as_deref(), Some("gpt-4o"));
        assert_eq!(profiles["reviewer"].supports_system_role, Some(false));
        assert_eq!(profiles["writer"].custom_instructions.len(), 1);
    }

    #[test]
    fn missing_profiles_key_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_yaml(&dir, "profiles.yaml", "not_profiles:\n  a: 1\n");

        let err = load_profiles(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = AppConfig {
            api_key: Some("sk-secret".into()),
            ..AppConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
