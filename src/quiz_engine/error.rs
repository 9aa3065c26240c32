//! Setup-time error types.
//!
//! Gameplay never fails: short option lists, ignored actions and an exhausted
//! pool are all normal outcomes. Only loading a dataset or config can error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    /// An error reading a dataset or config file from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML document did not match the expected schema.
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Dataset contains no countries")]
    EmptyDataset,

    #[error("Duplicate country id in dataset: {0}")]
    DuplicateCountry(String),

    /// Answers are matched by display name, so names must be unique too.
    #[error("Duplicate country name in dataset: {0}")]
    DuplicateName(String),

    #[error("Unknown difficulty mode: {0:?} (expected EASY, CLASSIC or HARD)")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, QuizError>;
