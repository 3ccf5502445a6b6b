//! Error types for decoding wire names back into the closed enumerations.

use thiserror::Error;

/// Errors produced when parsing operator or predicate names.
///
/// These are the only failure paths in the expression model; constructing
/// nodes and enums directly never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The string is not one of the canonical logical operator names.
    #[error("unknown logical operator `{0}`")]
    UnknownOperator(String),

    /// The string is not one of the canonical filter predicate names.
    #[error("unknown filter predicate `{0}`")]
    UnknownPredicate(String),
}
