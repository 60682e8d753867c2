//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::{LogoError, SessionError};

/// Errors emitted while loading or validating a logo catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read catalog file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Logo(#[from] LogoError),

    #[error("catalog contains no logos")]
    Empty,

    #[error("catalog contains duplicate logo name {name:?}")]
    DuplicateName { name: String },
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
