//! # Queryhaus
//!
//! Query-string composition engine for PostgreSQL database-access layers:
//! templated SQL fragments that nest, flatten, and compile into
//! parameterized statements with continuously numbered `$1`, `$2`, …
//! placeholders.
//!
//! ## Quick Start
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! fn main() -> Result<(), QueryhausError> {
//!     let power = QueryString::new("power > {}", vec![1000.into()])?;
//!     let trainer = QueryString::new("trainer = {}", vec!["ash".into()])?;
//!
//!     let select = QueryString::new(
//!         "SELECT name FROM pokemon WHERE {}",
//!         vec![power.and(trainer).into()],
//!     )?;
//!
//!     // Debug rendering, with values inlined (never executed)
//!     assert_eq!(
//!         select.to_string(),
//!         "SELECT name FROM pokemon WHERE power > 1000 AND trainer = 'ash'"
//!     );
//!
//!     // Parameterized form for the driver
//!     let (sql, args) = select.compile();
//!     assert_eq!(sql, "SELECT name FROM pokemon WHERE power > $1 AND trainer = $2");
//!     let _query = bind_query(&sql, &args); // ready for `.fetch_all(&pool)`
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod bind;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use bind::bind_query;
pub use errors::QueryhausError;
pub use query_string::{QueryArg, QueryString, QueryStringError};
pub use sql_value::SqlValue;

// Re-export internal crates
pub use query_string;
pub use sql_value;

// Re-export external dependencies used in public API
pub use sqlx;
