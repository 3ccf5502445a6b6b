//! Integration tests for the query builder.
//!
//! Covers the assembly contract end to end: operator presence at the root,
//! call-order preservation, nested groups, snapshot semantics, and the
//! serialized shape handed to downstream consumers.

use pretty_assertions::assert_eq;
use serde_json::json;

use trellis::prelude::*;

#[test]
fn test_fresh_builder_with_each_operator() {
    for op in [
        LogicalOperator::And,
        LogicalOperator::Or,
        LogicalOperator::Xor,
    ] {
        let encoded = serde_json::to_value(QueryBuilder::with_operator(op).build()).unwrap();
        assert_eq!(
            encoded,
            json!({"operator": op.as_str(), "negate": false})
        );
    }
}

#[test]
fn test_default_builder_omits_operator() {
    let encoded = serde_json::to_value(QueryBuilder::new().build()).unwrap();
    assert_eq!(encoded, json!({"negate": false}));

    // Passing the set's first member explicitly still records it.
    let encoded =
        serde_json::to_value(QueryBuilder::with_operator(LogicalOperator::And).build()).unwrap();
    assert_eq!(encoded, json!({"operator": "and", "negate": false}));
}

#[test]
fn test_single_condition_shape() {
    let node = QueryBuilder::new()
        .condition("name", FilterPredicate::StartsWith, "An")
        .build();

    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({
            "negate": false,
            "children": [{
                "negate": false,
                "property": "name",
                "predicate": "startsWith",
                "value": "An"
            }]
        })
    );
}

#[test]
fn test_conditions_preserve_call_order() {
    let properties = ["a", "b", "c", "d", "e", "f"];
    let mut builder = QueryBuilder::new();
    for (i, property) in properties.iter().enumerate() {
        builder = builder.condition(*property, FilterPredicate::Equal, i as i64);
    }

    let node = builder.build();
    let children = node.children.as_ref().unwrap();
    assert_eq!(children.len(), properties.len());
    for (i, child) in children.iter().enumerate() {
        assert_eq!(child.property.as_deref(), Some(properties[i]));
        assert_eq!(child.value, Some(ConditionValue::Int(i as i64)));
    }
}

#[test]
fn test_group_builds_one_child_with_inner_order() {
    let node = QueryBuilder::new()
        .or_group(|g| {
            g.condition("status", FilterPredicate::Equal, "active")
                .condition("status", FilterPredicate::Equal, "pending")
        })
        .build();

    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({
            "negate": false,
            "children": [{
                "operator": "or",
                "negate": false,
                "children": [
                    {
                        "negate": false,
                        "property": "status",
                        "predicate": "equal",
                        "value": "active"
                    },
                    {
                        "negate": false,
                        "property": "status",
                        "predicate": "equal",
                        "value": "pending"
                    }
                ]
            }]
        })
    );
}

#[test]
fn test_nesting_to_depth_five() {
    let node = QueryBuilder::with_operator(LogicalOperator::And)
        .and_group(|g1| {
            g1.or_group(|g2| {
                g2.xor_group(|g3| {
                    g3.and_group(|g4| g4.eq("leaf", 5))
                })
            })
        })
        .build();

    let mut current = &node;
    let expected_operators = [
        LogicalOperator::And,
        LogicalOperator::And,
        LogicalOperator::Or,
        LogicalOperator::Xor,
        LogicalOperator::And,
    ];
    for operator in expected_operators {
        assert_eq!(current.operator, Some(operator));
        assert_eq!(current.child_count(), 1);
        current = &current.children.as_ref().unwrap()[0];
    }
    assert_eq!(current.property.as_deref(), Some("leaf"));
    assert_eq!(current.value, Some(ConditionValue::Int(5)));
}

#[test]
fn test_sibling_groups_and_leaves_interleave_in_order() {
    let node = QueryBuilder::with_operator(LogicalOperator::And)
        .eq("tenant", "acme")
        .or_group(|g| g.is_null("archived_at").eq("archived", false))
        .gt("seats", 10)
        .build();

    let children = node.children.as_ref().unwrap();
    assert_eq!(children.len(), 3);
    assert!(children[0].is_leaf());
    assert!(children[1].is_group());
    assert!(children[2].is_leaf());
    assert_eq!(children[2].property.as_deref(), Some("seats"));
}

#[test]
fn test_snapshots_are_deep_equal_and_detached() {
    let builder = QueryBuilder::new().eq("a", 1).or_group(|g| g.eq("b", 2));

    let first = builder.build();
    let second = builder.build();
    assert_eq!(first, second);

    // Mutating one snapshot is invisible to the other and to the builder.
    let mut mutated = first;
    mutated.push_child(QueryNode::leaf("c", FilterPredicate::Equal, Some(3.into())));
    if let Some(children) = mutated.children.as_mut() {
        children[1].negate = true;
    }
    assert_eq!(builder.build(), second);
}

#[test]
fn test_builder_usable_after_build() {
    let builder = QueryBuilder::new().eq("a", 1);
    let before = builder.build();

    let builder = builder.eq("b", 2);
    let after = builder.build();

    assert_eq!(before.child_count(), 1);
    assert_eq!(after.child_count(), 2);
    assert_eq!(after.children.as_ref().unwrap()[0], before.children.unwrap()[0]);
}

#[test]
fn test_into_node_matches_last_snapshot() {
    let builder = QueryBuilder::with_operator(LogicalOperator::Xor).eq("k", "v");
    let snapshot = builder.build();
    assert_eq!(builder.into_node(), snapshot);
}

#[test]
#[should_panic(expected = "bad group")]
fn test_group_closure_failure_propagates() {
    let _ = QueryBuilder::new()
        .eq("kept", true)
        .or_group(|_| panic!("bad group"));
}

#[test]
fn test_end_to_end_scenario() {
    let node = QueryBuilder::with_operator(LogicalOperator::And)
        .condition("age", FilterPredicate::GreaterThan, 18)
        .condition("country", FilterPredicate::Equal, "US")
        .build();

    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({
            "operator": "and",
            "negate": false,
            "children": [
                {
                    "negate": false,
                    "property": "age",
                    "predicate": "greaterThan",
                    "value": 18
                },
                {
                    "negate": false,
                    "property": "country",
                    "predicate": "equal",
                    "value": "US"
                }
            ]
        })
    );
}
