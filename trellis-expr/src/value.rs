//! The untyped payload a condition leaf compares against.

use serde::{Deserialize, Serialize};

/// A comparison value: any scalar, sequence, or nested structure.
///
/// The payload is deliberately uninterpreted; type compatibility with the
/// leaf's predicate is the downstream evaluator's concern. Serialized
/// untagged, so the wire form is the plain JSON value.
///
/// Untagged deserialization tries variants in declaration order: `List`
/// must precede the `Json` catch-all or arrays would never reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// String value.
    String(String),
    /// Sequence of values.
    List(Vec<ConditionValue>),
    /// Arbitrary nested structure.
    Json(serde_json::Value),
}

impl ConditionValue {
    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for ConditionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for ConditionValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for ConditionValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ConditionValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for ConditionValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for ConditionValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<serde_json::Value> for ConditionValue {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

impl<T: Into<ConditionValue>> From<Vec<T>> for ConditionValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ConditionValue>> From<Option<T>> for ConditionValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}
