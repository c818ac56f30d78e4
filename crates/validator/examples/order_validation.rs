//! Validates a small batch of orders and prints every finding.
//!
//! Run with `RUST_LOG=waypoint_validator=trace` to see descent events.

use chrono::NaiveDate;
use regex::Regex;
use tracing_subscriber::EnvFilter;
use waypoint_validator::prelude::*;

struct Customer {
    firstname: Option<String>,
    country: Option<String>,
}

struct OrderLine {
    item_code: Option<String>,
}

struct Order {
    order_id: Option<String>,
    ordered_on: Option<NaiveDate>,
    customer: Option<Customer>,
    orderlines: Option<Vec<OrderLine>>,
}

fn validate_order(order: &Order, order_id: &Regex) -> ValidationResult {
    let opening = NaiveDate::from_ymd_opt(2024, 1, 1);

    Context::of("order", order)
        .evaluate_string("orderId", |o| o.order_id.as_deref(), |id| {
            id.fail_when_missing().fail_when_not_matching(order_id)
        })
        .evaluate_temporal("orderedOn", |o| o.ordered_on.as_ref(), |date| match &opening {
            Some(opening) => date.fail_when_missing().fail_when_before(opening),
            None => date.fail_when_missing(),
        })
        .evaluate("customer", |o| o.customer.as_ref(), |customer| {
            customer
                .fail_when_missing()
                .validate_string_field("firstname", |c| c.firstname.as_deref(), 10, Required::Mandatory)
                .evaluate_string("country", |c| c.country.as_deref(), |country| {
                    country.as_optional().fail_when_not_in(["DK", "NO", "SE"])
                })
        })
        .evaluate_collection("orderlines", |o| o.orderlines.as_ref(), |lines| {
            lines
                .fail_when_missing()
                .fail_when_empty()
                .evaluate_each_item("orderline", |line| {
                    line.validate_string_field("itemCode", |l| l.item_code.as_deref(), 6, Required::Mandatory)
                })
        })
        .into_result()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let order_id = Regex::new(r"[A-Z]-\d+")?;

    let orders = [
        Order {
            order_id: Some("A-1".into()),
            ordered_on: NaiveDate::from_ymd_opt(2024, 3, 14),
            customer: Some(Customer {
                firstname: Some("Jens".into()),
                country: Some("DK".into()),
            }),
            orderlines: Some(vec![OrderLine {
                item_code: Some("XY-1".into()),
            }]),
        },
        Order {
            order_id: Some("17".into()),
            ordered_on: NaiveDate::from_ymd_opt(2023, 12, 24),
            customer: Some(Customer {
                firstname: None,
                country: Some("DE".into()),
            }),
            orderlines: Some(vec![
                OrderLine {
                    item_code: Some("XY-2".into()),
                },
                OrderLine {
                    item_code: Some("TOO-LONG-CODE".into()),
                },
            ]),
        },
    ];

    let mut guard = ValidationResult::rooted("batch").guard();
    for order in &orders {
        let result = validate_order(order, &order_id);
        match result.conclude(|c| c.fail_on_first_failure()) {
            Ok(()) => println!("✓ order accepted"),
            Err(error) => println!("✗ order rejected with {}", error.code()),
        }
        guard.register_result(result);
    }

    println!("\nAll findings:");
    for registration in guard.iter() {
        println!("  [{}] {} at {}", registration.severity(), registration.details(), registration.location());
    }

    match guard.close() {
        Ok(_) => println!("\nbatch accepted"),
        Err(error) => println!("\nbatch rejected: {error}"),
    }
    Ok(())
}
