//! Fluent assembly of query expression trees.

use smol_str::SmolStr;
use tracing::trace;

use trellis_expr::{ConditionValue, FilterPredicate, LogicalOperator, QueryNode};

/// Chainable assembler producing one [`QueryNode`] tree.
///
/// Every chaining method consumes the builder and returns it, so calls read
/// in the order the tree is assembled. Nested groups are built by fresh
/// builders handed to a closure.
///
/// ```rust
/// use trellis_expr::LogicalOperator;
/// use trellis_query::QueryBuilder;
///
/// let node = QueryBuilder::with_operator(LogicalOperator::And)
///     .gt("age", 18)
///     .eq("country", "US")
///     .or_group(|g| g.eq("role", "admin").eq("role", "auditor"))
///     .build();
///
/// assert_eq!(node.child_count(), 3);
/// ```
///
/// # Snapshot semantics
///
/// [`build`](Self::build) returns a deep copy of the tree assembled so far.
/// The snapshot is detached: mutating it never affects the builder, and the
/// builder stays usable; further chaining followed by another `build` yields
/// a different snapshot. [`into_node`](Self::into_node) is the zero-copy
/// terminal handoff once no further chaining is needed.
///
/// # Validation
///
/// There is none. Inputs are recorded as-is; a structurally nonsensical tree
/// (an empty group, a leaf whose value makes no sense for its predicate)
/// builds fine and is the downstream consumer's to reject.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    node: QueryNode,
}

impl QueryBuilder {
    /// Create a builder whose root carries no combining operator.
    ///
    /// The root records an operator only when one is supplied explicitly:
    /// via [`with_operator`](Self::with_operator) or the `use_*` methods.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder whose root is scoped to `operator`.
    ///
    /// Presence decides recording: `with_operator(LogicalOperator::And)`
    /// records `And` like any other member of the set.
    pub fn with_operator(operator: LogicalOperator) -> Self {
        Self {
            node: QueryNode::group(operator),
        }
    }

    /// Set the current node's operator to [`LogicalOperator::And`].
    pub fn use_and(mut self) -> Self {
        self.node.operator = Some(LogicalOperator::And);
        self
    }

    /// Set the current node's operator to [`LogicalOperator::Or`].
    pub fn use_or(mut self) -> Self {
        self.node.operator = Some(LogicalOperator::Or);
        self
    }

    /// Set the current node's operator to [`LogicalOperator::Xor`].
    pub fn use_xor(mut self) -> Self {
        self.node.operator = Some(LogicalOperator::Xor);
        self
    }

    /// Raise the current node's negation flag.
    ///
    /// The flag defaults to false on every node and cannot be lowered.
    pub fn negated(mut self) -> Self {
        self.node.negate = true;
        self
    }

    /// Append a condition leaf comparing `property` against `value`.
    pub fn condition(
        mut self,
        property: impl Into<SmolStr>,
        predicate: FilterPredicate,
        value: impl Into<ConditionValue>,
    ) -> Self {
        self.node
            .push_child(QueryNode::leaf(property, predicate, Some(value.into())));
        self
    }

    /// Append an arbitrary pre-built node as a child.
    ///
    /// The escape hatch for value-less leaves and for grafting trees built
    /// elsewhere.
    pub fn push(mut self, node: QueryNode) -> Self {
        self.node.push_child(node);
        self
    }

    /// Append a nested group scoped to `operator`.
    ///
    /// A fresh, independent builder is handed to the closure; its terminal
    /// build output becomes one child of this builder's current node. The
    /// closure runs synchronously; a panic inside it propagates unmodified,
    /// and mutations applied before the panic are kept.
    pub fn group<F>(mut self, operator: LogicalOperator, f: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        let sub = f(Self::with_operator(operator));
        self.node.push_child(sub.into_node());
        self
    }

    /// Append a nested [`LogicalOperator::And`] group.
    pub fn and_group<F>(self, f: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        self.group(LogicalOperator::And, f)
    }

    /// Append a nested [`LogicalOperator::Or`] group.
    pub fn or_group<F>(self, f: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        self.group(LogicalOperator::Or, f)
    }

    /// Append a nested [`LogicalOperator::Xor`] group.
    pub fn xor_group<F>(self, f: F) -> Self
    where
        F: FnOnce(QueryBuilder) -> QueryBuilder,
    {
        self.group(LogicalOperator::Xor, f)
    }

    // Condition sugar, named after the predicates.

    /// Append `property equal value`.
    pub fn eq(self, property: impl Into<SmolStr>, value: impl Into<ConditionValue>) -> Self {
        self.condition(property, FilterPredicate::Equal, value)
    }

    /// Append `property notEqual value`.
    pub fn ne(self, property: impl Into<SmolStr>, value: impl Into<ConditionValue>) -> Self {
        self.condition(property, FilterPredicate::NotEqual, value)
    }

    /// Append `property greaterThan value`.
    pub fn gt(self, property: impl Into<SmolStr>, value: impl Into<ConditionValue>) -> Self {
        self.condition(property, FilterPredicate::GreaterThan, value)
    }

    /// Append `property greaterOrEqual value`.
    pub fn gte(self, property: impl Into<SmolStr>, value: impl Into<ConditionValue>) -> Self {
        self.condition(property, FilterPredicate::GreaterOrEqual, value)
    }

    /// Append `property lessThan value`.
    pub fn lt(self, property: impl Into<SmolStr>, value: impl Into<ConditionValue>) -> Self {
        self.condition(property, FilterPredicate::LessThan, value)
    }

    /// Append `property lessOrEqual value`.
    pub fn lte(self, property: impl Into<SmolStr>, value: impl Into<ConditionValue>) -> Self {
        self.condition(property, FilterPredicate::LessOrEqual, value)
    }

    /// Append `property contains value`.
    pub fn contains(self, property: impl Into<SmolStr>, value: impl Into<ConditionValue>) -> Self {
        self.condition(property, FilterPredicate::Contains, value)
    }

    /// Append `property startsWith value`.
    pub fn starts_with(
        self,
        property: impl Into<SmolStr>,
        value: impl Into<ConditionValue>,
    ) -> Self {
        self.condition(property, FilterPredicate::StartsWith, value)
    }

    /// Append `property endsWith value`.
    pub fn ends_with(
        self,
        property: impl Into<SmolStr>,
        value: impl Into<ConditionValue>,
    ) -> Self {
        self.condition(property, FilterPredicate::EndsWith, value)
    }

    /// Append `property matches value`.
    pub fn matches(self, property: impl Into<SmolStr>, value: impl Into<ConditionValue>) -> Self {
        self.condition(property, FilterPredicate::Matches, value)
    }

    /// Append `property in values`.
    pub fn in_list<I, V>(self, property: impl Into<SmolStr>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ConditionValue>,
    {
        self.condition(
            property,
            FilterPredicate::In,
            ConditionValue::List(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Append `property notIn values`.
    pub fn not_in_list<I, V>(self, property: impl Into<SmolStr>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ConditionValue>,
    {
        self.condition(
            property,
            FilterPredicate::NotIn,
            ConditionValue::List(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Append `property isNull`, a value-less leaf.
    pub fn is_null(mut self, property: impl Into<SmolStr>) -> Self {
        self.node
            .push_child(QueryNode::leaf(property, FilterPredicate::IsNull, None));
        self
    }

    /// Append `property notNull`, a value-less leaf.
    pub fn is_not_null(mut self, property: impl Into<SmolStr>) -> Self {
        self.node
            .push_child(QueryNode::leaf(property, FilterPredicate::NotNull, None));
        self
    }

    /// Take a snapshot of the tree assembled so far.
    ///
    /// Returns a deep copy; see the type-level docs for the snapshot
    /// contract. Performs no completeness validation.
    pub fn build(&self) -> QueryNode {
        trace!(children = self.node.child_count(), "query expression snapshot");
        self.node.clone()
    }

    /// Consume the builder and hand off the tree without copying.
    pub fn into_node(self) -> QueryNode {
        self.node
    }
}
