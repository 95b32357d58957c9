use crate::{FocusError, FocusResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variables consulted for the API key when the config file does
/// not name one.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub classifier: ClassifierSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierSettings {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            api_key_env: None,
        }
    }
}

impl ClassifierSettings {
    /// Environment variable names to try, in order.
    pub fn api_key_env_vars(&self) -> Vec<String> {
        match &self.api_key_env {
            Some(name) => vec![name.clone()],
            None => API_KEY_ENV_VARS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Read the API key from the first non-empty candidate variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key_env_vars()
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/focuspath/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("focuspath/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("focuspath\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from an explicit path. A missing file yields the defaults; an
    /// unreadable or malformed one is logged and also yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn try_load_from(path: &Path) -> FocusResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| FocusError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config.normalized())
    }

    /// A zero timeout would fail every request, so it falls back to the default.
    fn normalized(mut self) -> Self {
        if self.classifier.timeout_secs == 0 {
            tracing::warn!(
                "timeout_secs = 0 is not usable, using {}s",
                DEFAULT_TIMEOUT_SECS
            );
            self.classifier.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert_eq!(config.classifier.model, DEFAULT_MODEL);
        assert_eq!(config.classifier.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.classifier.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_partial_classifier_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[classifier]\nmodel = \"gemini-2.5-pro\"\ntimeout_secs = 5").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.classifier.model, "gemini-2.5-pro");
        assert_eq!(config.classifier.timeout_secs, 5);
        assert_eq!(config.classifier.endpoint, DEFAULT_ENDPOINT);
        assert!(config.classifier.api_key_env.is_none());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "classifier = [not toml").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.classifier.model, DEFAULT_MODEL);

        let result = AppConfig::try_load_from(&path);
        assert!(matches!(result, Err(FocusError::Config(_))));
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[classifier]\ntimeout_secs = 0\nmodel = \"gemini-2.5-pro\"\n").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.classifier.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.classifier.model, "gemini-2.5-pro");
    }

    #[test]
    fn test_api_key_env_vars_order() {
        let settings = ClassifierSettings::default();
        assert_eq!(settings.api_key_env_vars(), vec!["GEMINI_API_KEY", "API_KEY"]);

        let settings = ClassifierSettings {
            api_key_env: Some("MY_KEY".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.api_key_env_vars(), vec!["MY_KEY"]);
    }

    #[test]
    fn test_resolve_api_key_from_named_variable() {
        let settings = ClassifierSettings {
            api_key_env: Some("FOCUSPATH_TEST_KEY_RESOLVE".to_string()),
            ..Default::default()
        };
        std::env::set_var("FOCUSPATH_TEST_KEY_RESOLVE", "  secret  ");
        assert_eq!(settings.resolve_api_key().as_deref(), Some("secret"));

        std::env::set_var("FOCUSPATH_TEST_KEY_RESOLVE", "   ");
        assert!(settings.resolve_api_key().is_none());
        std::env::remove_var("FOCUSPATH_TEST_KEY_RESOLVE");
    }
}
