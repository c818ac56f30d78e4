//! Order-domain fixtures shared by the integration tests.

#![allow(dead_code)]

use waypoint_validator::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct Address {
    pub addressline1: Option<String>,
    pub zipcode: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Person {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub billing_address: Option<Address>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderLine {
    pub item_code: Option<String>,
    pub quantity: u32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Order {
    pub order_id: Option<String>,
    pub customer: Option<Person>,
    pub orderlines: Option<Vec<OrderLine>>,
    pub shipping_address: Option<Address>,
}

pub fn person(firstname: &str) -> Person {
    Person {
        firstname: Some(firstname.to_owned()),
        ..Person::default()
    }
}

pub fn line(item_code: &str) -> OrderLine {
    OrderLine {
        item_code: Some(item_code.to_owned()),
        quantity: 1,
        description: None,
    }
}

/// A fully valid order.
pub fn complete_order() -> Order {
    Order {
        order_id: Some("A-1".to_owned()),
        customer: Some(Person {
            billing_address: Some(Address {
                addressline1: Some("åvej 3".to_owned()),
                zipcode: Some("2300".to_owned()),
            }),
            ..person("Jens")
        }),
        orderlines: Some(vec![line("XY-1"), line("XY-2")]),
        shipping_address: None,
    }
}

/// The full rule set used by the scenario tests.
pub fn validate_order(order: Option<&Order>) -> ValidationResult {
    Context::new("order", order)
        .fail_when_missing()
        .evaluate("customer", |o| o.customer.as_ref(), |customer| {
            customer
                .fail_when_missing()
                .validate_string_field("firstname", |c| c.firstname.as_deref(), 10, Required::Mandatory)
                .evaluate("billingAddress", |c| c.billing_address.as_ref(), |address| {
                    address.as_optional().evaluate_string(
                        "addressline1",
                        |a| a.addressline1.as_deref(),
                        |line| line.fail_when_missing().fail_when_longer_than(10),
                    )
                })
        })
        .evaluate_collection("orderlines", |o| o.orderlines.as_ref(), |lines| {
            lines
                .fail_when_missing()
                .fail_when_empty()
                .evaluate_each_item("orderline", |line| {
                    line.validate_string_field("itemCode", |l| l.item_code.as_deref(), 10, Required::Mandatory)
                })
        })
        .into_result()
}

pub fn failure_codes(result: &ValidationResult) -> Vec<&str> {
    result
        .iter()
        .filter(|r| r.is_failure())
        .map(Registration::code)
        .collect()
}
