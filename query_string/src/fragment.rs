//! Transient fragments produced while flattening a query tree

/// A literal text span plus an optional placeholder binding.
///
/// Fragments exist only for the duration of one flattening pass; they are
/// built fresh each time and never shared or mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Literal text preceding this fragment's placeholder, or the trailing
    /// literal text for the final fragment
    pub prefix: String,
    /// 1-based placeholder number when this fragment binds a scalar
    /// parameter; `None` for trailing text, nested expansions, and inlined
    /// keywords
    pub index: Option<usize>,
}

impl Fragment {
    /// Create a fragment carrying only literal text
    pub fn literal(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            index: None,
        }
    }

    /// Create a fragment bound to a placeholder number
    pub fn bound(prefix: impl Into<String>, index: usize) -> Self {
        Self {
            prefix: prefix.into(),
            index: Some(index),
        }
    }
}
