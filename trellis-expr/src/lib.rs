//! # trellis-expr
//!
//! Expression model for the Trellis query builder.
//!
//! This crate defines the shape of a query expression tree and nothing
//! else: no parsing, no evaluation, no persistence.
//! - [`LogicalOperator`] and [`FilterPredicate`], the closed enumerations
//! - [`ConditionValue`], the untyped comparison payload
//! - [`QueryNode`], the single recursive entity every tree is made of
//!
//! The serialized form of these types is the wire contract consumed by
//! evaluators and serializers downstream.
//!
//! ## Example
//!
//! ```rust
//! use trellis_expr::{ConditionValue, FilterPredicate, LogicalOperator, QueryNode};
//!
//! let mut root = QueryNode::group(LogicalOperator::Or);
//! root.push_child(QueryNode::leaf(
//!     "role",
//!     FilterPredicate::Equal,
//!     Some(ConditionValue::from("admin")),
//! ));
//!
//! assert!(root.is_group());
//! assert_eq!(root.child_count(), 1);
//! ```

pub mod error;
pub mod node;
pub mod operator;
pub mod predicate;
pub mod value;

pub use error::ParseError;
pub use node::QueryNode;
pub use operator::LogicalOperator;
pub use predicate::FilterPredicate;
pub use value::ConditionValue;
