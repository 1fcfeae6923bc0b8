//! Configuration handling for AgentBoost
//!
//! Configuration is stored in `.agentboost.toml` (project root) and
//! `~/.config/agentboost/config.toml` (global). The project file, when
//! present, replaces the global one; command-line parameters override both.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the project-local configuration file.
pub const PROJECT_CONFIG: &str = ".agentboost.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Language-model settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LlmConfig {
    /// Enable language-model enhancement of the generated document.
    pub enabled: bool,

    /// Model identifier sent to the API.
    pub model: String,

    /// Base URL of an OpenAI-compatible API.
    pub api_base: String,

    /// API key. Environment variables (`AGENTBOOST_API_KEY`,
    /// `OPENAI_API_KEY`) take precedence over this field.
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: "gpt-4o-mini".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            api_key: None,
        }
    }
}

/// Combined configuration (global file overridden by project file).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Output filename for generated briefings.
    pub output: String,

    /// Language-model settings.
    pub llm: LlmConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: "AGENTS.md".to_string(),
            llm: LlmConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration for a project root: the global file when present,
    /// replaced by the project file when that exists too.
    pub fn load(project_root: &Path) -> Result<Self> {
        let project_path = project_root.join(PROJECT_CONFIG);
        if project_path.exists() {
            return Self::load_file(&project_path);
        }

        match Self::global_config_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Returns the global config file location.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "agentboost", "agentboost")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Saves this configuration as the project file, returning its path.
    pub fn save_project(&self, project_root: &Path) -> Result<PathBuf> {
        let path = project_root.join(PROJECT_CONFIG);
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.output, "AGENTS.md");
        assert!(config.llm.enabled);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_project_config() {
        let toml = r#"
output = "BRIEFING.md"

[llm]
enabled = false
model = "gpt-4o"
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output, "BRIEFING.md");
        assert!(!config.llm.enabled);
        assert_eq!(config.llm.model, "gpt-4o");
        // Unset fields keep their defaults.
        assert_eq!(config.llm.api_base, "https://api.openai.com/v1");
    }

    #[test]
    fn project_file_is_loaded_when_present() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG),
            "output = \"NOTES.md\"\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.output, "NOTES.md");
    }

    #[test]
    fn malformed_project_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG), "output = [not toml").unwrap();

        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let dir = TempDir::new().unwrap();

        let mut config = Config::default();
        config.output = "BRIEFING.md".to_string();
        config.llm.model = "local-model".to_string();

        let path = config.save_project(dir.path()).unwrap();
        assert!(path.ends_with(PROJECT_CONFIG));

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded, config);
    }
}
