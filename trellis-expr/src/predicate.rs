//! The closed set of comparison kinds a condition leaf can apply.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The comparison a condition leaf applies between its property and value.
///
/// The semantics of each kind are owned by the downstream evaluator; this
/// crate only guarantees the value is drawn from this closed set. Serialized
/// as the camelCase name (`"equal"`, `"greaterOrEqual"`, `"doesNotContain"`,
/// ...). Names and declaration order are stable and part of the wire
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterPredicate {
    /// Property equals the value.
    Equal,
    /// Property differs from the value.
    NotEqual,
    /// Property is greater than or equal to the value.
    GreaterOrEqual,
    /// Property is less than or equal to the value.
    LessOrEqual,
    /// Property is strictly greater than the value.
    GreaterThan,
    /// Property is strictly less than the value.
    LessThan,
    /// Property starts with the value.
    StartsWith,
    /// Property ends with the value.
    EndsWith,
    /// Property does not start with the value.
    DoesNotStartWith,
    /// Property does not end with the value.
    DoesNotEndWith,
    /// Property contains the value.
    Contains,
    /// Property does not contain the value.
    DoesNotContain,
    /// Property is null. Takes no value.
    IsNull,
    /// Property is not null. Takes no value.
    NotNull,
    /// Property matches the value, typically a pattern.
    Matches,
    /// Property does not match the value.
    DoesNotMatch,
    /// Property is one of the listed values.
    In,
    /// Property is none of the listed values.
    NotIn,
    /// Every element of the property satisfies the value.
    All,
    /// Some element of the property satisfies the value.
    Any,
}

impl FilterPredicate {
    /// The canonical wire name of this predicate.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::NotEqual => "notEqual",
            Self::GreaterOrEqual => "greaterOrEqual",
            Self::LessOrEqual => "lessOrEqual",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::DoesNotStartWith => "doesNotStartWith",
            Self::DoesNotEndWith => "doesNotEndWith",
            Self::Contains => "contains",
            Self::DoesNotContain => "doesNotContain",
            Self::IsNull => "isNull",
            Self::NotNull => "notNull",
            Self::Matches => "matches",
            Self::DoesNotMatch => "doesNotMatch",
            Self::In => "in",
            Self::NotIn => "notIn",
            Self::All => "all",
            Self::Any => "any",
        }
    }

    /// Whether this predicate compares against no value.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::IsNull | Self::NotNull)
    }

    /// The complementary predicate, where one exists in the closed set.
    ///
    /// `All` and `Any` have no complement and return `None`.
    pub const fn inverse(self) -> Option<Self> {
        match self {
            Self::Equal => Some(Self::NotEqual),
            Self::NotEqual => Some(Self::Equal),
            Self::GreaterOrEqual => Some(Self::LessThan),
            Self::LessOrEqual => Some(Self::GreaterThan),
            Self::GreaterThan => Some(Self::LessOrEqual),
            Self::LessThan => Some(Self::GreaterOrEqual),
            Self::StartsWith => Some(Self::DoesNotStartWith),
            Self::EndsWith => Some(Self::DoesNotEndWith),
            Self::DoesNotStartWith => Some(Self::StartsWith),
            Self::DoesNotEndWith => Some(Self::EndsWith),
            Self::Contains => Some(Self::DoesNotContain),
            Self::DoesNotContain => Some(Self::Contains),
            Self::IsNull => Some(Self::NotNull),
            Self::NotNull => Some(Self::IsNull),
            Self::Matches => Some(Self::DoesNotMatch),
            Self::DoesNotMatch => Some(Self::Matches),
            Self::In => Some(Self::NotIn),
            Self::NotIn => Some(Self::In),
            Self::All | Self::Any => None,
        }
    }
}

impl fmt::Display for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterPredicate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(Self::Equal),
            "notEqual" => Ok(Self::NotEqual),
            "greaterOrEqual" => Ok(Self::GreaterOrEqual),
            "lessOrEqual" => Ok(Self::LessOrEqual),
            "greaterThan" => Ok(Self::GreaterThan),
            "lessThan" => Ok(Self::LessThan),
            "startsWith" => Ok(Self::StartsWith),
            "endsWith" => Ok(Self::EndsWith),
            "doesNotStartWith" => Ok(Self::DoesNotStartWith),
            "doesNotEndWith" => Ok(Self::DoesNotEndWith),
            "contains" => Ok(Self::Contains),
            "doesNotContain" => Ok(Self::DoesNotContain),
            "isNull" => Ok(Self::IsNull),
            "notNull" => Ok(Self::NotNull),
            "matches" => Ok(Self::Matches),
            "doesNotMatch" => Ok(Self::DoesNotMatch),
            "in" => Ok(Self::In),
            "notIn" => Ok(Self::NotIn),
            "all" => Ok(Self::All),
            "any" => Ok(Self::Any),
            _ => Err(ParseError::UnknownPredicate(s.to_string())),
        }
    }
}
