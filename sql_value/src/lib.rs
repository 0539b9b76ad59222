//! Scalar SQL values for the queryhaus ecosystem
//!
//! This crate provides the closed scalar value union used by the query
//! composition engine, along with conversions from common Rust types and
//! display-only literal rendering.

pub mod literal;
pub mod types;

pub use types::SqlValue;
