//! The recursive query expression node.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::operator::LogicalOperator;
use crate::predicate::FilterPredicate;
use crate::value::ConditionValue;

/// One node of a query expression tree.
///
/// A node is either a *condition leaf* (`property`/`predicate`/`value` set,
/// no `children`) or a *combinator* (`operator` plus `children`, no leaf
/// fields). The builder never mixes both on one node, but the shape permits
/// it; a consumer encountering such a node must define its own policy
/// (treating `children` as authoritative is the sensible reading, nothing
/// here enforces it).
///
/// # Wire contract
///
/// The serialized field names `operator`, `negate`, `property`, `predicate`,
/// `value`, and `children` are the interface handed to evaluators and
/// serializers; renaming or re-encoding them is a breaking change. Every
/// optional field is omitted when absent. `negate` is always emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryNode {
    /// How a downstream evaluator combines `children`. Absent on a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<LogicalOperator>,

    /// Invert this node's result. Defaults to false and is never unset.
    #[serde(default)]
    pub negate: bool,

    /// The field name a condition leaf applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<SmolStr>,

    /// The comparison a condition leaf applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<FilterPredicate>,

    /// The payload compared against. Optional even on a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ConditionValue>,

    /// Ordered child nodes. Present on group and root nodes; append-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<QueryNode>>,
}

impl QueryNode {
    /// Create a condition leaf.
    pub fn leaf(
        property: impl Into<SmolStr>,
        predicate: FilterPredicate,
        value: Option<ConditionValue>,
    ) -> Self {
        Self {
            property: Some(property.into()),
            predicate: Some(predicate),
            value,
            ..Self::default()
        }
    }

    /// Create an empty combinator scoped to `operator`.
    pub fn group(operator: LogicalOperator) -> Self {
        Self {
            operator: Some(operator),
            ..Self::default()
        }
    }

    /// Whether this node carries leaf fields and no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none() && (self.property.is_some() || self.predicate.is_some())
    }

    /// Whether this node carries children.
    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }

    /// Append a child, creating the `children` sequence on first use.
    pub fn push_child(&mut self, child: QueryNode) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.as_ref().map_or(0, Vec::len)
    }
}
