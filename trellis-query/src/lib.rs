//! # trellis-query
//!
//! Fluent builder producing Trellis query expression trees.
//!
//! The builder assembles one [`QueryNode`](trellis_expr::QueryNode) tree for
//! handoff to an external consumer such as a SQL translator, a REST
//! query-string serializer, or an in-memory evaluator. It records what the
//! caller says and validates nothing; semantics live downstream.
//!
//! ## Building a filter
//!
//! ```rust
//! use trellis_expr::{FilterPredicate, LogicalOperator};
//! use trellis_query::QueryBuilder;
//!
//! let node = QueryBuilder::with_operator(LogicalOperator::And)
//!     .condition("age", FilterPredicate::GreaterThan, 18)
//!     .eq("country", "US")
//!     .build();
//!
//! assert_eq!(node.operator, Some(LogicalOperator::And));
//! assert_eq!(node.child_count(), 2);
//! ```
//!
//! ## Nested groups
//!
//! Each nested group is assembled by a fresh builder handed to a closure:
//!
//! ```rust
//! use trellis_query::QueryBuilder;
//!
//! let node = QueryBuilder::new()
//!     .eq("active", true)
//!     .or_group(|g| g.eq("role", "admin").eq("role", "auditor"))
//!     .build();
//!
//! let group = &node.children.as_ref().unwrap()[1];
//! assert_eq!(group.child_count(), 2);
//! ```

pub mod builder;
pub mod logging;

pub use builder::QueryBuilder;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::QueryBuilder;
    pub use trellis_expr::{
        ConditionValue, FilterPredicate, LogicalOperator, ParseError, QueryNode,
    };
}
