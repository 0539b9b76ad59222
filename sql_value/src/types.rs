//! Scalar value definitions
//!
//! This module provides the scalar value union bound into compiled
//! statements, plus conversion functions from common Rust types.

use serde::{Deserialize, Serialize};

/// A scalar value that can appear as a positional statement parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(chrono::DateTime<chrono::Utc>),
    Null,
}

/// Convert basic Rust types to SqlValue
impl From<String> for SqlValue {
    fn from(val: String) -> Self {
        SqlValue::Text(val)
    }
}

impl From<&str> for SqlValue {
    fn from(val: &str) -> Self {
        SqlValue::Text(val.to_string())
    }
}

impl From<i16> for SqlValue {
    fn from(val: i16) -> Self {
        SqlValue::Integer(val as i64)
    }
}

impl From<i32> for SqlValue {
    fn from(val: i32) -> Self {
        SqlValue::Integer(val as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(val: i64) -> Self {
        SqlValue::Integer(val)
    }
}

impl From<f32> for SqlValue {
    fn from(val: f32) -> Self {
        SqlValue::Float(val as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(val: f64) -> Self {
        SqlValue::Float(val)
    }
}

impl From<bool> for SqlValue {
    fn from(val: bool) -> Self {
        SqlValue::Boolean(val)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for SqlValue {
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        SqlValue::Timestamp(val)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_conversions() {
        assert_eq!(SqlValue::from("pikachu"), SqlValue::Text("pikachu".to_string()));
        assert_eq!(SqlValue::from(42_i32), SqlValue::Integer(42));
        assert_eq!(SqlValue::from(42_i64), SqlValue::Integer(42));
        assert_eq!(SqlValue::from(1.5_f64), SqlValue::Float(1.5));
        assert_eq!(SqlValue::from(true), SqlValue::Boolean(true));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(SqlValue::from(Some(7_i32)), SqlValue::Integer(7));
        assert_eq!(SqlValue::from(Option::<i32>::None), SqlValue::Null);
    }
}
