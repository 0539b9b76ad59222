//! Error types for query composition

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryStringError {
    #[error(
        "template '{template}' declares {placeholders} placeholder(s) but {arguments} argument(s) were supplied"
    )]
    ArityMismatch {
        template: String,
        placeholders: usize,
        arguments: usize,
    },
}
