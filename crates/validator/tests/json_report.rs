//! Integration tests for JSON rendering of result trees.

#![cfg(feature = "serde")]

mod common;

use common::{Order, OrderLine, complete_order, validate_order};
use serde_json::{Value, json};
use waypoint_validator::codes;

fn broken_order() -> Order {
    Order {
        orderlines: Some(vec![OrderLine::default()]),
        ..complete_order()
    }
}

#[test]
fn json_value_mirrors_tree_shape() {
    let order = broken_order();
    let json = validate_order(Some(&order)).to_json_value();

    assert_eq!(json["context"], "order");
    assert_eq!(json["context_path"], "");
    assert_eq!(json["location"], "order");

    // customer, orderlines
    let entries = json["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|entry| entry["kind"] == "result"));

    let element = &json["entries"][1]["entries"][0];
    assert_eq!(element["location"], "order.orderlines[0]");
    assert_eq!(element["entries"][0]["entries"][0]["code"], codes::MISSING);
    assert_eq!(element["entries"][0]["entries"][0]["location"], "order.orderlines[0].itemCode");
}

#[test]
fn registration_fields_are_rendered() {
    let order = broken_order();
    let json = validate_order(Some(&order)).to_json_value();

    let item_code = &json["entries"][1]["entries"][0]["entries"][0];
    assert_eq!(
        item_code["entries"][1],
        json!({
            "kind": "registration",
            "code": codes::NOT_MARKED_AS_OPTIONAL,
            "message": "not marked as optional but is null",
            "severity": "warning",
            "context": "itemCode",
            "location": "order.orderlines[0].itemCode",
            "context_path": "order.orderlines.orderline.itemCode",
            "inputs": [],
        })
    );
}

#[test]
fn derived_serialize_matches_json_value() {
    let order = broken_order();
    let result = validate_order(Some(&order));

    let derived: Value = serde_json::to_value(&result).expect("serializable");
    assert_eq!(derived, result.to_json_value());
}

#[test]
fn null_inputs_serialize_as_null() {
    let mut result = waypoint_validator::foundation::ValidationResult::rooted("order");
    result.register_failure("X", "null input", vec![None, Some("b".to_owned())]);

    let json = result.to_json_value();
    assert_eq!(json["entries"][0]["inputs"], json!([null, "b"]));
}
