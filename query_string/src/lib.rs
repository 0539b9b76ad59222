//! Query String - Fragment tree compiler for queryhaus
//!
//! This crate turns a tree of templated SQL fragments into either a
//! human-readable display string or a parameterized statement plus an
//! ordered argument list for a prepared-statement driver.
//!
//! A [`QueryString`] pairs a template containing `{}` placeholder markers
//! with positional arguments. An argument can be a scalar value, an
//! unquoted keyword such as `DEFAULT`, or another `QueryString`, which is
//! how the surrounding query builder composes WHERE clauses, sub-selects
//! and the like. Compiling flattens the whole tree depth-first into one
//! statement whose `$1`, `$2`, … placeholders are numbered continuously
//! across nesting levels.

pub mod arg;
pub mod compose;
pub mod errors;
pub mod fragment;
pub mod template;


pub use arg::QueryArg;
pub use compose::QueryString;
pub use errors::QueryStringError;
pub use fragment::Fragment;
