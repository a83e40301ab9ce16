use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid {field} {value:?} in {config_path}: {reason}")]
    Invalid {
        config_path: PathBuf,
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// User settings for the docmark CLI.
///
/// ```toml
/// corpus_path = "~/docs/manual"
/// author = "alice"
/// marker_kind = "note"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root of the markup corpus for backlink and graph queries.
    pub corpus_path: PathBuf,
    /// Written into manual marker open tags.
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_marker_kind")]
    pub marker_kind: String,
}

/// `$USER`, or `user` when unset or unusable in a marker tag.
pub fn default_author() -> String {
    std::env::var("USER")
        .ok()
        .filter(|user| !user.is_empty() && !user.contains(':'))
        .unwrap_or_else(|| "user".to_string())
}

pub fn default_marker_kind() -> String {
    "note".to_string()
}

impl Config {
    /// A config for `corpus_path` with the default author and marker kind.
    pub fn new(corpus_path: impl Into<PathBuf>) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            author: default_author(),
            marker_kind: default_marker_kind(),
        }
    }

    /// Loads the config at `config_path`. A missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        config.corpus_path = Self::expand_path(&config.corpus_path).unwrap_or(config.corpus_path);
        config.validate(config_path)?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/docmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and `$VARS`. `None` if a variable is undefined.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }

    /// Author and kind end up inside `<!-- MANUAL:START:author:timestamp:kind -->`,
    /// whose fields are `:` separated. `config_path` only names the file in errors.
    pub fn validate(&self, config_path: &Path) -> Result<(), ConfigError> {
        let invalid = |field, value: &str, reason| ConfigError::Invalid {
            config_path: config_path.to_path_buf(),
            field,
            value: value.to_string(),
            reason,
        };

        if self.author.trim().is_empty() || self.author.contains(':') {
            return Err(invalid("author", &self.author, "must be non-empty and contain no ':'"));
        }
        if self.marker_kind.is_empty()
            || self
                .marker_kind
                .chars()
                .any(|c| c == ':' || c.is_whitespace())
        {
            return Err(invalid(
                "marker_kind",
                &self.marker_kind,
                "must be non-empty with no ':' or whitespace",
            ));
        }
        Ok(())
    }
}
