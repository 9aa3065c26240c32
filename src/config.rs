//! Loading runtime configuration from TOML.
//!
//! The file path comes from `TRIVIA_CONFIG_PATH`. Every key is optional:
//!
//! ```toml
//! rng_seed = 42                     # reproducible pools and options
//! feedback_ms = 2500                # dev/test override only, see below
//! dataset_path = "countries.toml"   # alternative [[countries]] table
//! default_mode = "CLASSIC"          # preselected in the mode picker
//! ```
//!
//! Feedback always lasts [`FEEDBACK_DURATION`] in a normal game.
//! `feedback_ms` exists only for development and scripted test runs of the
//! terminal binary. Setting it logs a warning.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::quiz_engine::{
    error::Result, scheduler::FEEDBACK_DURATION, Dataset, DifficultyMode,
};

pub const CONFIG_PATH_VAR: &str = "TRIVIA_CONFIG_PATH";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TriviaConfig {
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Development override for the feedback display time.
    #[serde(default)]
    pub feedback_ms: Option<u64>,
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
    #[serde(default)]
    pub default_mode: Option<DifficultyMode>,
}

impl TriviaConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// [`FEEDBACK_DURATION`] unless the development override is set.
    pub fn feedback_delay(&self) -> Duration {
        match self.feedback_ms {
            Some(ms) => {
                warn!(target: "config", feedback_ms = ms, "Feedback duration overridden; for development only");
                Duration::from_millis(ms)
            }
            None => FEEDBACK_DURATION,
        }
    }

    pub fn default_mode(&self) -> DifficultyMode {
        self.default_mode.unwrap_or_default()
    }

    /// The configured country table, or the bundled one.
    ///
    /// A configured table that fails to load is logged and replaced by the
    /// bundled table rather than aborting the game.
    pub fn dataset(&self) -> Dataset {
        match &self.dataset_path {
            Some(path) => match Dataset::load(path) {
                Ok(ds) => ds,
                Err(e) => {
                    error!(target: "config", path = %path.display(), error = %e, "Failed to load dataset; using bundled table");
                    Dataset::builtin()
                }
            },
            None => Dataset::builtin(),
        }
    }
}

/// Load config from `TRIVIA_CONFIG_PATH`. Missing, unreadable or invalid
/// files fall back to defaults.
pub fn load_config_from_env() -> TriviaConfig {
    let Ok(path) = std::env::var(CONFIG_PATH_VAR) else {
        return TriviaConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(s) => match TriviaConfig::from_toml_str(&s) {
            Ok(cfg) => {
                info!(target: "config", %path, "Loaded trivia config (TOML)");
                cfg
            }
            Err(e) => {
                error!(target: "config", %path, error = %e, "Failed to parse TOML config");
                TriviaConfig::default()
            }
        },
        Err(e) => {
            error!(target: "config", %path, error = %e, "Failed to read TOML config file");
            TriviaConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = TriviaConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.feedback_delay(), Duration::from_millis(2500));
        assert_eq!(cfg.default_mode(), DifficultyMode::Classic);
        assert!(cfg.rng_seed.is_none());
        assert_eq!(cfg.dataset().len(), Dataset::builtin().len());
    }

    #[test]
    fn parses_every_key() {
        let cfg = TriviaConfig::from_toml_str(
            r#"
            rng_seed = 42
            feedback_ms = 10
            dataset_path = "countries.toml"
            default_mode = "HARD"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.rng_seed, Some(42));
        assert_eq!(cfg.feedback_delay(), Duration::from_millis(10));
        assert_eq!(cfg.default_mode(), DifficultyMode::Hard);
        assert_eq!(cfg.dataset_path, Some(PathBuf::from("countries.toml")));
    }

    #[test]
    fn feedback_override_is_opt_in() {
        let cfg = TriviaConfig::from_toml_str("rng_seed = 1").unwrap();
        assert_eq!(cfg.feedback_delay(), FEEDBACK_DURATION);
        let dev = TriviaConfig { feedback_ms: Some(0), ..cfg };
        assert_eq!(dev.feedback_delay(), Duration::ZERO);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(TriviaConfig::from_toml_str("default_mode = \"NIGHTMARE\"").is_err());
    }

    #[test]
    fn missing_dataset_file_falls_back_to_bundled() {
        let cfg = TriviaConfig {
            dataset_path: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Default::default()
        };
        assert_eq!(cfg.dataset().len(), Dataset::builtin().len());
    }
}
