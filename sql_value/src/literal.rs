//! Display-only SQL literal rendering
//!
//! This module renders scalar values as inline SQL literals for logging and
//! debugging. The output performs no quote escaping and must never be sent
//! to a database as statement text; execution always goes through the
//! parameterized compile path instead.

use chrono::{DateTime, Utc};

use crate::types::SqlValue;

impl SqlValue {
    /// Render this value as an inline SQL literal for display purposes.
    ///
    /// Text values are single-quoted without escaping embedded quotes, so
    /// the result is not safe to execute.
    pub fn to_sql_literal(&self) -> String {
        match self {
            SqlValue::Text(val) => format!("'{}'", val),
            SqlValue::Integer(val) => val.to_string(),
            SqlValue::Float(val) => val.to_string(),
            SqlValue::Boolean(val) => val.to_string(),
            SqlValue::Timestamp(val) => format!("'{}'", format_timestamp(val)),
            SqlValue::Null => "null".to_string(),
        }
    }
}

/// Format a timestamp with a space between date and time, dropping the
/// fractional part when it is zero
fn format_timestamp(val: &DateTime<Utc>) -> String {
    if val.timestamp_subsec_micros() == 0 {
        val.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        val.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_text_is_single_quoted() {
        assert_eq!(SqlValue::from("pikachu").to_sql_literal(), "'pikachu'");
    }

    #[test]
    fn test_text_quotes_are_not_escaped() {
        // Display-only path: embedded quotes pass through unchanged
        assert_eq!(SqlValue::from("o'clock").to_sql_literal(), "'o'clock'");
    }

    #[test]
    fn test_numeric_and_boolean_are_bare() {
        assert_eq!(SqlValue::Integer(1000).to_sql_literal(), "1000");
        assert_eq!(SqlValue::Float(1.5).to_sql_literal(), "1.5");
        assert_eq!(SqlValue::Boolean(false).to_sql_literal(), "false");
    }

    #[test]
    fn test_null_is_bare_null() {
        assert_eq!(SqlValue::Null.to_sql_literal(), "null");
    }

    #[test]
    fn test_timestamp_uses_space_separator() {
        let ts = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            SqlValue::Timestamp(ts).to_sql_literal(),
            "'2023-01-02 03:04:05'"
        );
    }

    #[test]
    fn test_timestamp_keeps_nonzero_fraction() {
        let ts = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::microseconds(250_000);
        assert_eq!(
            SqlValue::Timestamp(ts).to_sql_literal(),
            "'2023-01-02 03:04:05.250000'"
        );
    }
}
