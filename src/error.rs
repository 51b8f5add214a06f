//! Error types for md2slack operations.

use thiserror::Error;

/// Errors that can occur while loading tokens or writing output.
///
/// Rendering itself is total; errors only arise at the boundary where
/// token records are turned into [`Token`](crate::Token)s.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind} token is missing required field `{field}`")]
    MissingField {
        kind: String,
        field: &'static str,
    },

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
