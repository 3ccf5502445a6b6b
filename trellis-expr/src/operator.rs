//! Logical operators joining the children of a combinator node.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The logical connective deciding how a combinator node's children are
/// aggregated by a downstream evaluator.
///
/// The meaning is owned by the evaluator; this crate only records the
/// choice: with `And` every child must hold, with `Or` any child holding
/// suffices, with `Xor` exactly one child holding suffices.
///
/// Serialized as the lowercase name (`"and"`, `"or"`, `"xor"`). The names
/// and the declaration order are stable; both are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperator {
    /// Every child must hold.
    And,
    /// Any child holding suffices.
    Or,
    /// Exactly one child holding suffices.
    Xor,
}

impl LogicalOperator {
    /// The canonical wire name of this operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalOperator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            "xor" => Ok(Self::Xor),
            _ => Err(ParseError::UnknownOperator(s.to_string())),
        }
    }
}
