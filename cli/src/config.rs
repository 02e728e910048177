use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "lotto.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub sample_size: usize,           // tickets per benchmark run
    pub rayon_threads: Option<usize>, // None = rayon default
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_size: 1_000_000,
            rayon_threads: None,
            verbose: false,
        }
    }
}

impl Config {
    /// Load `lotto.toml`; a missing file means defaults, a broken one is an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(s) => Self::parse(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg = Config::parse("rayon_threads = 4\n").unwrap();
        assert_eq!(cfg.rayon_threads, Some(4));
        assert_eq!(cfg.sample_size, 1_000_000);
        assert!(!cfg.verbose);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(matches!(
            Config::parse("sample_size = \"lots\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let cfg = Config::load_from(Path::new("does/not/exist/lotto.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
