use thiserror::Error;

use crate::github::ApiError;

#[derive(Error, Debug)]
pub enum PdError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing flag: {0}")]
    MissingFlag(String),

    #[error("Invalid or missing repo path, expect: owner/reponame")]
    InvalidRepoPath(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate {kind} name: [{title}] already exists")]
    Duplicate { kind: &'static str, title: String },

    #[error("Repository [{0}] does not have a full name")]
    NoFullName(String),

    #[error("{0}")]
    CheckFailed(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PdError>;
