//! Prelude module for convenient imports.
//!
//! Provides a single `use waypoint_validator::prelude::*;` import that brings
//! in the contexts, the result model and the escalation types.
//!
//! # Examples
//!
//! ```rust,ignore
//! use waypoint_validator::prelude::*;
//!
//! let result = Context::of("order", &order).fail_when_missing().into_result();
//! result.conclude(|c| c.fail_on_first_failure())?;
//! ```

// ============================================================================
// FOUNDATION: Result model and errors
// ============================================================================

pub use crate::foundation::{Entry, Registration, Severity, ValidationError, ValidationResult};

// ============================================================================
// CONTEXTS: Fluent checks and descent
// ============================================================================

pub use crate::context::{
    CollectionContext, Context, DefaultValidationFactory, IntoValidationResult, Required,
    StringContext, ValidationFactory,
};
#[cfg(feature = "temporal")]
pub use crate::context::{Temporal, TemporalContext};

// ============================================================================
// CONCLUSION: Escalation
// ============================================================================

pub use crate::conclusion::{Conclusion, ConclusionGuard};
