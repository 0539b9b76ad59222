//! Convenience re-exports for common queryhaus usage
//!
//! This prelude module re-exports the most commonly used items from the queryhaus ecosystem,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! // Now you have access to the query composition types and the sqlx hand-off
//! ```

// Core queryhaus components
pub use crate::bind::bind_query;
pub use crate::errors::QueryhausError;

// Query composition types
pub use query_string::{QueryArg, QueryString, QueryStringError};

// Scalar values
pub use sql_value::SqlValue;

// Common external dependencies
pub use sqlx;

// Commonly used external types
pub use chrono::{DateTime, Utc};
pub use sqlx::{PgPool, Postgres};
