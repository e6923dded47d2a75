//! TOML configuration.
//!
//! Every field is optional. The default file lives at
//! `<config_dir>/pocketkit/config.toml`; if it does not exist the defaults
//! are used.

use crate::chat::{ChatError, Rule, RuleSet, SessionOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid chat configuration: {0}")]
    Chat(#[from] ChatError),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PocketConfig {
    pub logging: LoggingConfig,
    pub chat: ChatConfig,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"pocketkit=debug"`.
    pub filter: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ChatConfig {
    pub bot_name: Option<String>,
    pub user_prompt: Option<String>,
    pub greeting: Option<String>,
    pub farewell: Option<String>,
    pub exit_words: Option<Vec<String>>,
    /// Replaces the built-in catch-all replies.
    pub fallback: Option<Vec<String>>,
    /// Extra rules, checked before the built-in ones.
    pub rules: Vec<RuleConfig>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub pattern: String,
    pub replies: Vec<String>,
}

impl PocketConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pocketkit").join("config.toml"))
    }
}

impl ChatConfig {
    /// The built-in rules with the configured rules in front and the
    /// configured fallback, if any.
    pub fn rule_set(&self) -> Result<RuleSet, ChatError> {
        let custom = self
            .rules
            .iter()
            .map(|rule| Rule::new(&rule.pattern, rule.replies.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        let rules = RuleSet::builtin().prepend(custom);
        match &self.fallback {
            Some(fallback) => rules.with_fallback(fallback.clone()),
            None => Ok(rules),
        }
    }

    /// Session text with configured overrides applied.
    pub fn session_options(&self) -> SessionOptions {
        let defaults = SessionOptions::default();
        SessionOptions {
            bot_name: self.bot_name.clone().unwrap_or(defaults.bot_name),
            user_prompt: self.user_prompt.clone().unwrap_or(defaults.user_prompt),
            greeting: self.greeting.clone().unwrap_or(defaults.greeting),
            farewell: self.farewell.clone().unwrap_or(defaults.farewell),
            exit_words: self.exit_words.clone().unwrap_or(defaults.exit_words),
        }
    }
}
