//! The escalation error.
//!
//! A [`ValidationError`] is raised when calling code decides that a
//! [`ValidationResult`] must not be accepted. It owns a snapshot of the full
//! result so the caller can still inspect every finding after the fact.

use std::borrow::Cow;

use crate::foundation::registration::Registration;
use crate::foundation::result::ValidationResult;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Error raised by a [`Conclusion`](crate::conclusion::Conclusion) or by
/// closing a [`ConclusionGuard`](crate::conclusion::ConclusionGuard).
///
/// # Examples
///
/// ```rust,ignore
/// use waypoint_validator::codes;
///
/// match result.conclude(|c| c.fail_on_first_failure()) {
///     Err(error) if error.code() == codes::MISSING => { /* ... */ }
///     Err(error) => eprintln!("{error}"),
///     Ok(()) => {}
/// }
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct ValidationError {
    code: Cow<'static, str>,
    message: String,
    result: Box<ValidationResult>,
    registration: Option<Box<Registration>>,
}

impl ValidationError {
    pub(crate) fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        result: ValidationResult,
        registration: Option<Registration>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            result: Box::new(result),
            registration: registration.map(Box::new),
        }
    }

    /// The escalated code: a registration's code or
    /// [`UNKNOWN_ERROR`](crate::codes::UNKNOWN_ERROR).
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The result that was escalated, nested entries included.
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// The registration that triggered the escalation, if a specific one did.
    pub fn registration(&self) -> Option<&Registration> {
        self.registration.as_deref()
    }

    /// Consumes the error and returns the escalated result.
    pub fn into_result(self) -> ValidationResult {
        *self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use crate::foundation::Severity;

    #[test]
    fn display_shows_code_and_message() {
        let error = ValidationError::new(codes::UNKNOWN_ERROR, "generic", ValidationResult::default(), None);
        assert_eq!(error.to_string(), "[9999] generic");
        assert!(error.registration().is_none());
    }

    #[test]
    fn keeps_result_snapshot() {
        let mut result = ValidationResult::rooted("order");
        result.register_failure("a", "first", Vec::new());
        let registration = Registration::new("a", "first", Severity::Failure);

        let error = ValidationError::new("a", "order: [a - first]", result.clone(), Some(registration));
        assert_eq!(error.code(), "a");
        assert_eq!(error.result(), &result);
        assert_eq!(error.registration().map(Registration::code), Some("a"));
        assert_eq!(error.into_result(), result);
    }
}
