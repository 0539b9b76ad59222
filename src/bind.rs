//! Driver hand-off for compiled statements
//!
//! This module binds a compiled statement's argument list onto a sqlx query
//! so callers can execute it against PostgreSQL. Pool and transaction
//! management stay with the caller.

use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::Postgres;

use sql_value::SqlValue;

/// Bind compiled arguments positionally onto `sqlx::query(sql)`.
///
/// `sql` and `args` are the two halves returned by
/// [`QueryString::compile`](query_string::QueryString::compile); the driver
/// owns quoting and escaping for every bound value. The returned query is
/// ready for `fetch_all`, `execute`, etc. on a caller-provided executor.
pub fn bind_query<'q>(sql: &'q str, args: &'q [SqlValue]) -> Query<'q, Postgres, PgArguments> {
    crate::debug_log!("[BIND] SQL: {}", sql);
    crate::debug_log!("[BIND] params count: {}", args.len());

    let mut query = sqlx::query(sql);
    for arg in args {
        crate::trace_log!("[BIND] arg: {:?}", arg);
        query = match arg {
            SqlValue::Text(val) => query.bind(val.as_str()),
            SqlValue::Integer(val) => query.bind(*val),
            SqlValue::Float(val) => query.bind(*val),
            SqlValue::Boolean(val) => query.bind(*val),
            SqlValue::Timestamp(val) => query.bind(*val),
            SqlValue::Null => query.bind(Option::<String>::None),
        };
    }
    query
}
