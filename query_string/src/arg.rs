//! Positional argument values
//!
//! A template argument is either a bindable scalar, an unquoted keyword
//! emitted verbatim, or a nested [`QueryString`] expanded in place. The
//! union is closed so argument dispatch in the flattener and renderers is
//! exhaustive and compiler-checked.

use serde::{Deserialize, Serialize};
use sql_value::SqlValue;

use crate::compose::QueryString;

/// A positional argument paired with one `{}` marker in a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryArg {
    /// A scalar value bound as a statement parameter
    Value(SqlValue),
    /// A keyword emitted verbatim and unescaped, e.g. `DEFAULT`. Keywords
    /// have no parameter form, so they are inlined into the statement text
    /// rather than bound.
    Unquoted(String),
    /// A nested query string expanded in place of this marker
    Nested(QueryString),
}

impl QueryArg {
    /// Wrap a keyword so it is emitted verbatim instead of quoted or bound
    pub fn unquoted(keyword: impl Into<String>) -> Self {
        QueryArg::Unquoted(keyword.into())
    }
}

impl From<SqlValue> for QueryArg {
    fn from(val: SqlValue) -> Self {
        QueryArg::Value(val)
    }
}

impl From<QueryString> for QueryArg {
    fn from(val: QueryString) -> Self {
        QueryArg::Nested(val)
    }
}

impl From<String> for QueryArg {
    fn from(val: String) -> Self {
        QueryArg::Value(val.into())
    }
}

impl From<&str> for QueryArg {
    fn from(val: &str) -> Self {
        QueryArg::Value(val.into())
    }
}

impl From<i16> for QueryArg {
    fn from(val: i16) -> Self {
        QueryArg::Value(val.into())
    }
}

impl From<i32> for QueryArg {
    fn from(val: i32) -> Self {
        QueryArg::Value(val.into())
    }
}

impl From<i64> for QueryArg {
    fn from(val: i64) -> Self {
        QueryArg::Value(val.into())
    }
}

impl From<f32> for QueryArg {
    fn from(val: f32) -> Self {
        QueryArg::Value(val.into())
    }
}

impl From<f64> for QueryArg {
    fn from(val: f64) -> Self {
        QueryArg::Value(val.into())
    }
}

impl From<bool> for QueryArg {
    fn from(val: bool) -> Self {
        QueryArg::Value(val.into())
    }
}

impl From<chrono::DateTime<chrono::Utc>> for QueryArg {
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        QueryArg::Value(val.into())
    }
}

impl<T> From<Option<T>> for QueryArg
where
    T: Into<QueryArg>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => QueryArg::Value(SqlValue::Null),
        }
    }
}
