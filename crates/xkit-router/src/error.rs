//! Errors raised while building a route table

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    /// Another registered template already normalizes to the same key.
    #[error("path: {path} already used (conflicts with {existing})")]
    Duplicate { path: String, existing: String },

    /// A structural key could not be encoded.
    #[error("invalid route key: {0}")]
    Key(#[from] serde_json::Error),
}

impl RouteError {
    pub(crate) fn duplicate(path: impl fmt::Display, existing: impl fmt::Display) -> Self {
        RouteError::Duplicate {
            path: path.to_string(),
            existing: existing.to_string(),
        }
    }
}
