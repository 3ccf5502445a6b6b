//! # Trellis
//!
//! A fluent builder for tree-shaped, serializable query expressions.
//!
//! Trellis assembles filter descriptions (logical operators, field
//! comparisons, nested sub-groups) into a single recursive
//! [`QueryNode`] tree meant to be handed to a separate query-execution
//! engine: translated into SQL, a REST query string, or an in-memory
//! predicate. Trellis itself never parses, evaluates, or stores anything.
//!
//! ## Quick start
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! let node = QueryBuilder::with_operator(LogicalOperator::And)
//!     .gt("age", 18)
//!     .eq("country", "US")
//!     .or_group(|g| g.eq("role", "admin").is_not_null("elevated_until"))
//!     .build();
//!
//! // The serialized tree is the wire contract handed downstream.
//! let wire = serde_json::to_string(&node).unwrap();
//! assert!(wire.contains("\"operator\":\"and\""));
//! ```
//!
//! ## Release notes
//!
//! The root's combining operator is recorded by *presence*, never by
//! truthiness of an encoded value: [`QueryBuilder::new`] leaves it unset,
//! while [`QueryBuilder::with_operator`] records the supplied operator even
//! when it is the first member of the set
//! ([`LogicalOperator::And`]). Builders keyed on a numeric encoding have
//! historically dropped a zero-encoded default operator; Trellis does not.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Expression model: operators, predicates, values, and the node shape.
pub mod expr {
    pub use trellis_expr::*;
}

/// Fluent builder producing expression trees.
pub mod query {
    pub use trellis_query::*;
}

pub use trellis_expr::{ConditionValue, FilterPredicate, LogicalOperator, ParseError, QueryNode};
pub use trellis_query::QueryBuilder;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use trellis_expr::{ConditionValue, FilterPredicate, LogicalOperator, QueryNode};
    pub use trellis_query::QueryBuilder;
}
