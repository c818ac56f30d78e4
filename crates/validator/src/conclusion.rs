//! Escalation of a finished result into a [`ValidationError`].
//!
//! Building a result never fails; findings are data. Calling code decides
//! afterwards whether the result is acceptable:
//!
//! - [`Conclusion`] - explicit, chainable escalation rules
//! - [`ConclusionGuard`] - owns a result and escalates every failure on close
//!
//! # Examples
//!
//! ```rust,ignore
//! use waypoint_validator::{codes, prelude::*};
//!
//! result.conclude(|c| {
//!     c.fail_on_code(codes::MISSING)?
//!         .fail_with_all_messages_as("ORDER-1", "order rejected")
//! })?;
//! ```

use std::borrow::Cow;
use std::ops::{Deref, DerefMut};

use crate::codes;
use crate::foundation::{Registration, ValidationError, ValidationResult};

// ============================================================================
// CONCLUSION
// ============================================================================

/// Read-only view over a finished result exposing the escalation rules.
///
/// Each rule returns the conclusion again when it does not fire, so rules
/// chain with `?`.
#[derive(Debug, Clone, Copy)]
pub struct Conclusion<'r> {
    result: &'r ValidationResult,
}

impl<'r> Conclusion<'r> {
    pub fn new(result: &'r ValidationResult) -> Self {
        Self { result }
    }

    pub fn result(&self) -> &'r ValidationResult {
        self.result
    }

    /// Fails when a registration with `code` exists and the result has any
    /// failure. The error carries that registration's message.
    ///
    /// The matching registration may itself be a warning; what matters is
    /// that some failure exists anywhere in the result.
    pub fn fail_on_code(self, code: &str) -> Result<Self, ValidationError> {
        match self.result.find_validation_code(code) {
            Some(registration) if self.result.has_failure() => {
                Err(self.escalate(code.to_owned(), registration.message(), Some(registration)))
            }
            _ => Ok(self),
        }
    }

    /// Like [`fail_on_code`](Self::fail_on_code) with a caller-chosen message.
    pub fn fail_on_code_with_message(
        self,
        code: &str,
        message: &str,
    ) -> Result<Self, ValidationError> {
        match self.result.find_validation_code(code) {
            Some(registration) if self.result.has_failure() => {
                Err(self.escalate(code.to_owned(), message, Some(registration)))
            }
            _ => Ok(self),
        }
    }

    /// Fails with the code of the first failure when any failure exists.
    ///
    /// The message lists the details of every registration, warnings
    /// included, joined with `", "`.
    pub fn fail_on_first_failure(self) -> Result<Self, ValidationError> {
        match self.result.first_failure() {
            Some(first) => {
                let message = self.result.all_details_as_string();
                Err(self.escalate(first.code().to_owned(), &message, Some(first)))
            }
            None => Ok(self),
        }
    }

    /// [`fail_with_all_messages_as`](Self::fail_with_all_messages_as) with
    /// [`UNKNOWN_ERROR`](crate::codes::UNKNOWN_ERROR) and no main message.
    pub fn fail_with_all_messages(self) -> Result<Self, ValidationError> {
        self.fail_with_all_messages_as(codes::UNKNOWN_ERROR, "")
    }

    /// Fails with `code` when any failure exists.
    ///
    /// The message is `"{main_message}: "` (omitted when `main_message` is
    /// empty) followed by the details of every registration, each one
    /// terminated by `", "`. The error carries the first registration of the
    /// result.
    pub fn fail_with_all_messages_as(
        self,
        code: impl Into<Cow<'static, str>>,
        main_message: &str,
    ) -> Result<Self, ValidationError> {
        if !self.result.has_failure() {
            return Ok(self);
        }

        let mut message = if main_message.is_empty() {
            String::new()
        } else {
            format!("{main_message}: ")
        };
        for registration in self.result {
            message.push_str(&registration.details());
            message.push_str(", ");
        }
        Err(self.escalate(code, &message, self.result.iter().next()))
    }

    fn escalate(
        &self,
        code: impl Into<Cow<'static, str>>,
        message: &str,
        registration: Option<&Registration>,
    ) -> ValidationError {
        let code = code.into();
        tracing::debug!(
            code = %code,
            failures = self.result.iter().filter(|r| r.is_failure()).count(),
            context = self.result.context(),
            "validation result escalated"
        );
        ValidationError::new(code, message, self.result.clone(), registration.cloned())
    }
}

// ============================================================================
// CONCLUSION GUARD
// ============================================================================

/// Owns a result for the length of a scope and escalates every failure when
/// [`close`](Self::close)d.
///
/// The guard dereferences to the result, so registrations can be added
/// through it. Dropping a guard without closing it never panics; if the
/// result holds failures at that point a `warn!` event is emitted instead.
///
/// # Examples
///
/// ```rust,ignore
/// let mut guard = ValidationResult::rooted("batch").guard();
/// for order in &orders {
///     guard.register_result(validate_order(order));
/// }
/// let result = guard.close()?;
/// ```
#[derive(Debug)]
pub struct ConclusionGuard {
    result: ValidationResult,
    closed: bool,
}

impl ConclusionGuard {
    pub fn new(result: ValidationResult) -> Self {
        Self {
            result,
            closed: false,
        }
    }

    /// Ends the scope: fails with [`UNKNOWN_ERROR`](crate::codes::UNKNOWN_ERROR)
    /// and main message `"generic"` when any failure exists, otherwise
    /// hands the result back.
    pub fn close(mut self) -> Result<ValidationResult, ValidationError> {
        self.closed = true;
        let result = std::mem::take(&mut self.result);
        Conclusion::new(&result).fail_with_all_messages_as(codes::UNKNOWN_ERROR, "generic")?;
        Ok(result)
    }
}

impl Deref for ConclusionGuard {
    type Target = ValidationResult;

    fn deref(&self) -> &Self::Target {
        &self.result
    }
}

impl DerefMut for ConclusionGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.result
    }
}

impl Drop for ConclusionGuard {
    fn drop(&mut self) {
        if !self.closed && self.result.has_failure() {
            tracing::warn!(
                context = self.result.context(),
                failures = self.result.iter().filter(|r| r.is_failure()).count(),
                "validation guard dropped without close; failures were not escalated"
            );
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
