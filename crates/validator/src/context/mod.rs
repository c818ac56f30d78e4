//! Fluent validation contexts.
//!
//! A [`Context`] wraps one value of the object graph (possibly absent), owns
//! the [`ValidationResult`] of that level and carries the `optional` flag.
//! Checks are chained by value and register findings into the result;
//! descent methods build a child context per field, run a caller-supplied
//! validator on it and nest the child's result into the parent.
//!
//! Specialized checks are inherent impls on the same generic type:
//!
//! - [`StringContext`] (`Context<'a, str>`): length, pattern and set checks
//! - [`CollectionContext`] (`Context<'a, C>` where `&C: IntoIterator`):
//!   emptiness and per-element descent
//! - [`TemporalContext`] (`Context<'a, T>` where `T: Temporal`): bound checks
//!
//! # Examples
//!
//! ```rust,ignore
//! use waypoint_validator::prelude::*;
//!
//! let result = Context::of("order", &order)
//!     .validate_string_field("orderId", |o| o.order_id.as_deref(), 10, Required::Mandatory)
//!     .validate("customer", |o| o.customer.as_ref(), |customer| {
//!         customer
//!             .validate_string_field("firstname", |c| c.firstname.as_deref(), 10, Required::Mandatory)
//!             .into_result()
//!     })
//!     .into_result();
//! ```

mod collection;
mod factory;
mod string;
#[cfg(feature = "temporal")]
mod temporal;

use std::fmt;

use crate::codes;
use crate::foundation::registration::render;
use crate::foundation::ValidationResult;

pub use collection::CollectionContext;
pub use factory::{DefaultValidationFactory, ValidationFactory};
pub use string::StringContext;
#[cfg(feature = "temporal")]
pub use temporal::{Temporal, TemporalContext};

// ============================================================================
// REQUIRED
// ============================================================================

/// Whether a string field must be present, used by
/// [`Context::validate_string_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Required {
    /// An absent value registers [`MISSING`](crate::codes::MISSING).
    Mandatory,
    /// An absent value is accepted silently.
    Optional,
}

// ============================================================================
// CONTEXT
// ============================================================================

/// One level of a validation walk.
///
/// The value is fixed at construction. Every check that needs the value
/// first tests for absence; an absent value that was not marked with
/// [`as_optional`](Self::as_optional) adds one
/// [`NOT_MARKED_AS_OPTIONAL`](crate::codes::NOT_MARKED_AS_OPTIONAL) warning
/// per check.
#[derive(Debug)]
pub struct Context<'a, U: ?Sized> {
    value: Option<&'a U>,
    result: ValidationResult,
    optional: bool,
}

impl<'a, U: ?Sized> Context<'a, U> {
    /// Creates a root context named `context`.
    pub fn new(context: impl Into<String>, value: Option<&'a U>) -> Self {
        Self {
            value,
            result: ValidationResult::rooted(context),
            optional: false,
        }
    }

    /// Creates a root context over a value that is known to be present.
    pub fn of(context: impl Into<String>, value: &'a U) -> Self {
        Self::new(context, Some(value))
    }

    /// Creates a context attached to an existing path.
    ///
    /// `context_path` is the complete path of the parent level and
    /// `location` the index-aware path of this value.
    pub fn with_path(
        context: impl Into<String>,
        context_path: impl Into<String>,
        location: impl Into<String>,
        value: Option<&'a U>,
    ) -> Self {
        Self {
            value,
            result: ValidationResult::new(context, context_path, location),
            optional: false,
        }
    }

    pub fn value(&self) -> Option<&'a U> {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn context(&self) -> &str {
        self.result.context()
    }

    pub fn complete_path(&self) -> String {
        self.result.complete_path()
    }

    pub fn location(&self) -> &str {
        self.result.location()
    }

    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    pub fn into_result(self) -> ValidationResult {
        self.result
    }

    // ------------------------------------------------------------------------
    // Generic checks
    // ------------------------------------------------------------------------

    /// Marks an absent value as acceptable for all subsequent checks.
    ///
    /// Checks that already ran keep the warnings they registered.
    #[must_use = "builder methods must be chained or built"]
    pub fn as_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Registers [`MISSING`](crate::codes::MISSING) when the value is absent.
    ///
    /// This is the one check that never adds the optionality warning: the
    /// absence is already reported as a failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_when_missing(mut self) -> Self {
        if self.value.is_none() {
            self.result.register_null_validation(codes::MISSING, "is null");
        }
        self
    }

    /// Registers a failure when the value is present and `predicate` holds.
    ///
    /// `inputs` are rendered into the registration as diagnostic snapshots.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let input = "test";
    /// Context::of("order", &order)
    ///     .fail_when(|o| o.order_id.as_deref() == Some(input), "12", "input contains test", &[&input]);
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_when<P>(
        mut self,
        predicate: P,
        code: &'static str,
        message: &'static str,
        inputs: &[&dyn fmt::Display],
    ) -> Self
    where
        P: FnOnce(&'a U) -> bool,
    {
        if self.value.is_some_and(predicate) {
            let inputs = inputs.iter().map(|input| render(*input)).collect();
            self.result.register_failure(code, message, inputs);
        }
        self.warn_when_not_optional();
        self
    }

    // ------------------------------------------------------------------------
    // Descent
    // ------------------------------------------------------------------------

    /// Descends into the value extracted by `extractor` under the name `name`.
    ///
    /// The child context follows the path rules: its parent path is this
    /// level's complete path and its location extends this level's
    /// location. The child result is nested into this result. When this
    /// level's value is absent neither the extractor nor the validator runs.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let result = Context::of("order", &order)
    ///     .validate("customer", |o| o.customer.as_ref(), |customer| {
    ///         customer.fail_when_missing().into_result()
    ///     })
    ///     .into_result();
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn validate<V, E, F>(mut self, name: &str, extractor: E, validator: F) -> Self
    where
        V: ?Sized + 'a,
        E: FnOnce(&'a U) -> Option<&'a V>,
        F: FnOnce(Context<'a, V>) -> ValidationResult,
    {
        if let Some(value) = self.value {
            let child = self.child(name, extractor(value));
            tracing::trace!(
                path = %child.complete_path(),
                location = %child.location(),
                "descending into field"
            );
            let result = validator(child);
            self.result.register_result(result);
        }
        self.warn_when_not_optional();
        self
    }

    /// Like [`validate`](Self::validate), but the validator returns the
    /// child context itself instead of its result.
    #[must_use = "builder methods must be chained or built"]
    pub fn evaluate<V, E, F>(self, name: &str, extractor: E, validator: F) -> Self
    where
        V: ?Sized + 'a,
        E: FnOnce(&'a U) -> Option<&'a V>,
        F: FnOnce(Context<'a, V>) -> Context<'a, V>,
    {
        self.validate(name, extractor, |child| validator(child).into_result())
    }

    /// Hands the extracted value, possibly absent, to a routine that builds
    /// its own independently rooted result, and nests that result.
    ///
    /// Useful for reusing a validation routine written for another root.
    #[must_use = "builder methods must be chained or built"]
    pub fn delegate<V, E, F, R>(mut self, extractor: E, validator: F) -> Self
    where
        V: ?Sized + 'a,
        E: FnOnce(&'a U) -> Option<&'a V>,
        F: FnOnce(Option<&'a V>) -> R,
        R: IntoValidationResult,
    {
        if let Some(value) = self.value {
            let result = validator(extractor(value)).into_validation_result();
            self.result.register_result(result);
        }
        self.warn_when_not_optional();
        self
    }

    /// [`validate`](Self::validate) with a string child.
    #[must_use = "builder methods must be chained or built"]
    pub fn validate_string<E, F>(self, name: &str, extractor: E, validator: F) -> Self
    where
        E: FnOnce(&'a U) -> Option<&'a str>,
        F: FnOnce(StringContext<'a>) -> ValidationResult,
    {
        self.validate(name, extractor, validator)
    }

    /// [`evaluate`](Self::evaluate) with a string child.
    #[must_use = "builder methods must be chained or built"]
    pub fn evaluate_string<E, F>(self, name: &str, extractor: E, validator: F) -> Self
    where
        E: FnOnce(&'a U) -> Option<&'a str>,
        F: FnOnce(StringContext<'a>) -> StringContext<'a>,
    {
        self.evaluate(name, extractor, validator)
    }

    /// Shorthand for the most common string field rule set: presence
    /// (per `required`) and a maximum length.
    ///
    /// Produces exactly the registrations of
    ///
    /// ```rust,ignore
    /// ctx.evaluate_string(name, extractor, |s| s.fail_when_missing().fail_when_longer_than(max_len))
    /// ```
    ///
    /// (or `as_optional()` in place of `fail_when_missing()`).
    #[must_use = "builder methods must be chained or built"]
    pub fn validate_string_field<E>(
        self,
        name: &str,
        extractor: E,
        max_len: usize,
        required: Required,
    ) -> Self
    where
        E: FnOnce(&'a U) -> Option<&'a str>,
    {
        self.evaluate_string(name, extractor, |child| {
            let child = match required {
                Required::Mandatory => child.fail_when_missing(),
                Required::Optional => child.as_optional(),
            };
            child.fail_when_longer_than(max_len)
        })
    }

    /// [`validate`](Self::validate) with a collection child.
    #[must_use = "builder methods must be chained or built"]
    pub fn validate_collection<C, E, F>(self, name: &str, extractor: E, validator: F) -> Self
    where
        C: ?Sized + 'a,
        &'a C: IntoIterator,
        E: FnOnce(&'a U) -> Option<&'a C>,
        F: FnOnce(CollectionContext<'a, C>) -> ValidationResult,
    {
        self.validate(name, extractor, validator)
    }

    /// [`evaluate`](Self::evaluate) with a collection child.
    #[must_use = "builder methods must be chained or built"]
    pub fn evaluate_collection<C, E, F>(self, name: &str, extractor: E, validator: F) -> Self
    where
        C: ?Sized + 'a,
        &'a C: IntoIterator,
        E: FnOnce(&'a U) -> Option<&'a C>,
        F: FnOnce(CollectionContext<'a, C>) -> CollectionContext<'a, C>,
    {
        self.evaluate(name, extractor, validator)
    }

    /// [`validate`](Self::validate) with a temporal child.
    #[cfg(feature = "temporal")]
    #[must_use = "builder methods must be chained or built"]
    pub fn validate_temporal<T, E, F>(self, name: &str, extractor: E, validator: F) -> Self
    where
        T: Temporal + 'a,
        E: FnOnce(&'a U) -> Option<&'a T>,
        F: FnOnce(TemporalContext<'a, T>) -> ValidationResult,
    {
        self.validate(name, extractor, validator)
    }

    /// [`evaluate`](Self::evaluate) with a temporal child.
    #[cfg(feature = "temporal")]
    #[must_use = "builder methods must be chained or built"]
    pub fn evaluate_temporal<T, E, F>(self, name: &str, extractor: E, validator: F) -> Self
    where
        T: Temporal + 'a,
        E: FnOnce(&'a U) -> Option<&'a T>,
        F: FnOnce(TemporalContext<'a, T>) -> TemporalContext<'a, T>,
    {
        self.evaluate(name, extractor, validator)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    /// Builds the child context for a field named `name`.
    fn child<V: ?Sized + 'a>(&self, name: &str, value: Option<&'a V>) -> Context<'a, V> {
        let context_path = self.result.complete_path();
        let location = if context_path.is_empty() {
            name.to_owned()
        } else {
            format!("{}.{name}", self.result.location())
        };
        Context::with_path(name, context_path, location, value)
    }

    /// Runs one child per element, each at `{complete_path}[{index}]`.
    fn each_element<T, I, F>(&mut self, name: &str, elements: I, mut validator: F)
    where
        T: ?Sized + 'a,
        I: IntoIterator<Item = Option<&'a T>>,
        F: FnMut(Context<'a, T>) -> ValidationResult,
    {
        let path = self.result.complete_path();
        for (index, element) in elements.into_iter().enumerate() {
            let location = format!("{path}[{index}]");
            tracing::trace!(path = %path, location = %location, "validating collection element");
            let child = Context::with_path(name, path.as_str(), location, element);
            self.result.register_result(validator(child));
        }
    }

    /// Registers the optionality warning when the value is absent and the
    /// context was not marked optional.
    fn warn_when_not_optional(&mut self) {
        if self.value.is_none() && !self.optional {
            self.result.register_warning(
                codes::NOT_MARKED_AS_OPTIONAL,
                "not marked as optional but is null",
                Vec::new(),
            );
        }
    }

    fn register_failure_with_value(&mut self, code: &'static str, message: &'static str)
    where
        U: fmt::Display,
    {
        let input = self.value.and_then(|value| render(value));
        self.result.register_failure(code, message, vec![input]);
    }
}

// ============================================================================
// INTO VALIDATION RESULT
// ============================================================================

/// Anything a delegated validation routine may hand back.
pub trait IntoValidationResult {
    fn into_validation_result(self) -> ValidationResult;
}

impl IntoValidationResult for ValidationResult {
    fn into_validation_result(self) -> ValidationResult {
        self
    }
}

impl<U: ?Sized> IntoValidationResult for Context<'_, U> {
    fn into_validation_result(self) -> ValidationResult {
        self.into_result()
    }
}

// ============================================================================
// TESTS
// ============================================================================
