//! Error types for the queryhaus crate
//!
//! This module contains all error types that can be returned by queryhaus operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryhausError {
    #[error("Query composition error: {0}")]
    Composition(#[from] query_string::QueryStringError),
}
