//! # waypoint-validator
//!
//! Fluent, path-aware validation of nested object graphs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waypoint_validator::prelude::*;
//!
//! let result = Context::of("order", &order)
//!     .validate_string_field("orderId", |o| o.order_id.as_deref(), 10, Required::Mandatory)
//!     .validate("customer", |o| o.customer.as_ref(), |customer| {
//!         customer
//!             .validate_string_field("firstname", |c| c.firstname.as_deref(), 10, Required::Mandatory)
//!             .validate_string_field("lastname", |c| c.lastname.as_deref(), 10, Required::Optional)
//!             .into_result()
//!     })
//!     .evaluate_collection("orderlines", |o| o.orderlines.as_ref(), |lines| {
//!         lines.fail_when_empty().evaluate_each_item("orderline", |line| {
//!             line.validate_string_field("itemCode", |l| l.item_code.as_deref(), 10, Required::Mandatory)
//!         })
//!     })
//!     .into_result();
//!
//! for registration in &result {
//!     println!("{}", registration.details());
//! }
//!
//! result.conclude(|c| c.fail_on_first_failure())?;
//! ```
//!
//! ## Model
//!
//! - [`Context`](context::Context) wraps one value and its
//!   [`ValidationResult`](foundation::ValidationResult); checks never fail,
//!   they register findings.
//! - Every finding is a [`Registration`](foundation::Registration) with a
//!   code from [`codes`], a severity, the dotted field path and the
//!   index-aware location (`order.orderlines[1].itemCode`).
//! - An absent value checked without [`as_optional`](context::Context::as_optional)
//!   registers a [`NOT_MARKED_AS_OPTIONAL`](codes::NOT_MARKED_AS_OPTIONAL)
//!   warning per check.
//! - [`Conclusion`](conclusion::Conclusion) and
//!   [`ConclusionGuard`](conclusion::ConclusionGuard) turn a finished result
//!   into a [`ValidationError`](foundation::ValidationError) when the caller
//!   decides it is unacceptable.
//!
//! ## Features
//!
//! - `temporal` (default): bound checks for `chrono` date/time types.
//! - `serde` (default): `Serialize` for report types and
//!   [`ValidationResult::to_json_value`](foundation::ValidationResult::to_json_value).

pub mod codes;
pub mod conclusion;
pub mod context;
pub mod foundation;
pub mod prelude;
