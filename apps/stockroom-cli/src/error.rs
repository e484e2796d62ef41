//! # Console Error Type
//!
//! Unified error type for menu actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Menu action                                                           │
//! │  AppResult<Flow>                                                       │
//! │       │                                                                 │
//! │       ├── InvalidInput  ──► "Invalid input format!"   (loop continues) │
//! │       ├── Repo / Store  ──► "Error: <message>"        (loop continues) │
//! │       ├── EndOfInput    ──► menu returns normally                      │
//! │       └── Io / Config   ──► propagated to main        (fatal)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::{RepoError, UnknownCategory};
use stockroom_store::StoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    /// A repository rule was violated.
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// Saving or loading the snapshot failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The type selector was not a known category.
    #[error(transparent)]
    Category(#[from] UnknownCategory),

    /// Text typed at a prompt could not be parsed.
    #[error("Invalid input for {0}")]
    InvalidInput(&'static str),

    /// Standard input was closed.
    #[error("Input closed")]
    EndOfInput,

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading or writing the terminal failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Errors that end the program instead of returning to the menu.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Config(_))
    }

    /// Machine-readable code, used as a log field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Repo(err) => err.code(),
            AppError::Store(_) => "STORE_ERROR",
            AppError::Category(_) => "UNKNOWN_CATEGORY",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::EndOfInput => "END_OF_INPUT",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
