//! Result model of the validation engine.
//!
//! This module contains the data that every check produces and every caller
//! consumes:
//!
//! - **Registrations**: [`Registration`], [`Severity`]
//! - **Result tree**: [`ValidationResult`], [`Entry`]
//! - **Flattening**: [`Registrations`], [`IntoRegistrations`]
//! - **Escalation error**: [`ValidationError`]
//!
//! # Architecture
//!
//! A [`ValidationResult`] belongs to exactly one level of the validated
//! object graph. Descending into a field produces a child result that is
//! appended to the parent as a nested [`Entry::Result`], so the tree mirrors
//! the shape of the data:
//!
//! ```text
//! order                      (context_path "",               location "order")
//! ├── [VALRES-1 - is null]
//! └── customer               (context_path "order",          location "order.customer")
//!     └── firstname          (context_path "order.customer", location "order.customer.firstname")
//!         └── [VALRES-2 - too long: input: ...]
//! ```
//!
//! Consumers usually ignore the nesting and iterate the flattened view:
//!
//! ```rust,ignore
//! for registration in &result {
//!     println!("{}", registration.details());
//! }
//! ```

pub mod error;
pub mod iter;
pub mod registration;
pub mod result;

pub use error::ValidationError;
pub use iter::{IntoRegistrations, Registrations};
pub use registration::{Registration, Severity};
pub use result::{Entry, ValidationResult};
