//! Canonical validation codes.
//!
//! These are stable public constants so calling code can branch on the
//! code of a [`Registration`](crate::foundation::Registration) or a
//! [`ValidationError`](crate::foundation::ValidationError) without matching
//! on message text.

/// The checked value is absent.
pub const MISSING: &str = "VALRES-1";

/// A string value exceeds its maximum length.
pub const TOO_LONG: &str = "VALRES-2";

/// A check ran against an absent value that was never marked optional.
pub const NOT_MARKED_AS_OPTIONAL: &str = "VALRES-3";

/// A collection value has no elements.
pub const IS_EMPTY: &str = "VALRES-4";

/// A string value does not match a pattern or an allowed/forbidden set.
pub const MISMATCH: &str = "VALRES-5";

/// A temporal value lies after its upper bound.
pub const AFTER_TEMPORAL: &str = "VALRES-6";

/// A temporal value lies before its lower bound.
pub const BEFORE_TEMPORAL: &str = "VALRES-7";

/// A temporal value lies inside a forbidden interval.
pub const BETWEEN_TEMPORAL: &str = "VALRES-8";

/// A temporal value lies outside a required interval.
pub const NOT_BETWEEN_TEMPORAL: &str = "VALRES-9";

/// Sentinel for escalations that carry no more specific code.
pub const UNKNOWN_ERROR: &str = "9999";
