//! The composable query string and its flattening passes

use std::fmt;

use serde::{Deserialize, Serialize};
use sql_value::SqlValue;

use crate::arg::QueryArg;
use crate::errors::QueryStringError;
use crate::fragment::Fragment;
use crate::template;

/// A template string paired with its positional arguments.
///
/// Immutable once constructed: flattening builds derived output structures
/// and never touches the tree itself, so the same instance can be displayed
/// and compiled any number of times with identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryString {
    template: String,
    args: Vec<QueryArg>,
}

impl QueryString {
    /// Create a query string from a template and its positional arguments.
    ///
    /// Every `{}` marker in the template must be matched by exactly one
    /// argument; a mismatch in either direction fails with
    /// [`QueryStringError::ArityMismatch`]. Nested arguments were validated
    /// when they were constructed, so a successfully built tree is
    /// well-formed all the way down.
    ///
    /// ```
    /// use query_string::QueryString;
    ///
    /// let qs = QueryString::new("WHERE name = {}", vec!["pikachu".into()])?;
    /// assert_eq!(qs.compile().0, "WHERE name = $1");
    /// # Ok::<(), query_string::QueryStringError>(())
    /// ```
    pub fn new(
        template: impl Into<String>,
        args: Vec<QueryArg>,
    ) -> Result<Self, QueryStringError> {
        let template = template.into();
        let placeholders = template::placeholder_count(&template);

        if placeholders != args.len() {
            return Err(QueryStringError::ArityMismatch {
                template,
                placeholders,
                arguments: args.len(),
            });
        }

        Ok(Self::from_parts(template, args))
    }

    /// Internal constructor for templates that are correct by construction
    pub(crate) fn from_parts(template: impl Into<String>, args: Vec<QueryArg>) -> Self {
        Self {
            template: template.into(),
            args,
        }
    }

    /// The raw template, markers included
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The positional arguments, one per marker
    pub fn args(&self) -> &[QueryArg] {
        &self.args
    }

    /// Flatten this tree depth-first into `fragments` and `combined_args`,
    /// starting placeholder numbering at `start_index`.
    ///
    /// Returns the next free placeholder number, one past the highest index
    /// consumed by this subtree. Nested query strings are expanded in place
    /// with the running cursor, which is how sibling and nested placeholders
    /// share one continuously incrementing numbering space. Unquoted
    /// keywords are inlined into the fragment text and consume no index.
    pub(crate) fn bundle(
        &self,
        mut start_index: usize,
        fragments: &mut Vec<Fragment>,
        combined_args: &mut Vec<SqlValue>,
    ) -> usize {
        let segments = template::split_segments(&self.template);

        for (position, segment) in segments.into_iter().enumerate() {
            match self.args.get(position) {
                // The final segment after the last marker: trailing literal
                // text with no argument of its own.
                None => {
                    fragments.push(Fragment::literal(segment));
                }
                Some(QueryArg::Nested(inner)) => {
                    fragments.push(Fragment::literal(segment));
                    start_index = inner.bundle(start_index, fragments, combined_args);
                }
                Some(QueryArg::Unquoted(keyword)) => {
                    fragments.push(Fragment::literal(format!("{}{}", segment, keyword)));
                }
                Some(QueryArg::Value(value)) => {
                    fragments.push(Fragment::bound(segment, start_index));
                    combined_args.push(value.clone());
                    start_index += 1;
                }
            }
        }

        start_index
    }

    /// Compile into a parameterized statement and its argument list.
    ///
    /// The statement text carries `$1`, `$2`, … placeholders numbered
    /// left-to-right across the whole tree, and the returned values are in
    /// the same order, ready for a prepared-statement API. Values pass
    /// through unmodified; quoting and escaping belong to the driver.
    pub fn compile(&self) -> (String, Vec<SqlValue>) {
        let mut fragments = Vec::new();
        let mut combined_args = Vec::new();
        self.bundle(1, &mut fragments, &mut combined_args);

        let mut sql = String::new();
        for fragment in &fragments {
            sql.push_str(&fragment.prefix);
            if let Some(index) = fragment.index {
                sql.push_str(&format!("${}", index));
            }
        }

        tracing::debug!("[COMPILE] SQL: {}", sql);
        tracing::debug!("[COMPILE] params count: {}", combined_args.len());

        (sql, combined_args)
    }

    /// Combine two query strings with `AND`
    pub fn and(self, other: QueryString) -> QueryString {
        QueryString::join(" AND ", vec![self, other])
    }

    /// Combine two query strings with `OR`
    pub fn or(self, other: QueryString) -> QueryString {
        QueryString::join(" OR ", vec![self, other])
    }

    /// Join any number of query strings with a separator, e.g. `", "` for a
    /// column list or `" AND "` for a conjunction. An empty input yields the
    /// empty query string.
    pub fn join(separator: &str, parts: Vec<QueryString>) -> QueryString {
        let template = vec![template::PLACEHOLDER; parts.len()].join(separator);
        let args = parts.into_iter().map(QueryArg::Nested).collect();
        QueryString::from_parts(template, args)
    }
}

/// Human-readable rendering with values inlined as SQL literals.
///
/// For logs and debugging only: text values are quoted without escaping, so
/// the output is never safe to execute. Statements sent to a database go
/// through [`QueryString::compile`] instead.
impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fragments = Vec::new();
        let mut combined_args = Vec::new();
        self.bundle(1, &mut fragments, &mut combined_args);

        for fragment in &fragments {
            f.write_str(&fragment.prefix)?;
            if let Some(index) = fragment.index {
                if let Some(value) = combined_args.get(index - 1) {
                    f.write_str(&value.to_sql_literal())?;
                }
            }
        }

        Ok(())
    }
}
