//! A single recorded validation finding.
//!
//! A [`Registration`] is created once, by a
//! [`ValidationResult`](crate::foundation::ValidationResult) registration
//! method or explicitly by a caller, and never mutated afterwards.
//!
//! Code and message use `Cow<'static, str>` so the canonical codes and
//! literal messages stay allocation-free.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// SEVERITY
// ============================================================================

/// How serious a registration is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Severity {
    /// The validated data is invalid.
    Failure,
    /// The validated data is acceptable but suspicious, or the validation
    /// itself was set up loosely (e.g. an absent value not marked optional).
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure => f.write_str("failure"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

// ============================================================================
// REGISTRATION
// ============================================================================

/// One immutable validation event.
///
/// # Examples
///
/// ```rust,ignore
/// use waypoint_validator::foundation::{Registration, Severity};
///
/// let registration = Registration::new("A7", "item code unknown", Severity::Failure)
///     .with_inputs(vec![Some("XY-1".to_string())]);
///
/// assert_eq!(registration.details(), "[A7 - item code unknown: input: XY-1]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Registration {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    severity: Severity,
    context: String,
    location: String,
    context_path: String,
    /// Rendered snapshots of the offending values; `None` is a captured null.
    inputs: Vec<Option<String>>,
}

impl Registration {
    /// Creates a registration that is not yet attached to any path.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        severity: Severity,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity,
            context: String::new(),
            location: String::new(),
            context_path: String::new(),
            inputs: Vec::new(),
        }
    }

    /// Attaches the path metadata of the level that raised the finding.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(
        mut self,
        context: impl Into<String>,
        location: impl Into<String>,
        context_path: impl Into<String>,
    ) -> Self {
        self.context = context.into();
        self.location = location.into();
        self.context_path = context_path.into();
        self
    }

    /// Attaches the diagnostic input snapshot.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_inputs(mut self, inputs: Vec<Option<String>>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Stable identifier of the finding, e.g. [`MISSING`](crate::codes::MISSING).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Name of the level that raised the finding, e.g. `"firstname"`.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Index-aware path of the checked value, e.g. `"order.orderlines[0].itemCode"`.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Dotted field path including the raising level, e.g. `"order.customer.firstname"`.
    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    pub fn inputs(&self) -> &[Option<String>] {
        &self.inputs
    }

    /// Full diagnostic rendering: path, code, message and inputs.
    ///
    /// Null inputs render as empty strings. The path prefix is omitted when
    /// the registration is not attached to a path.
    pub fn details(&self) -> String {
        let mut details = String::new();
        if !self.context_path.is_empty() {
            details.push_str(&self.context_path);
            details.push_str(": ");
        }
        details.push('[');
        details.push_str(&self.code);
        details.push_str(" - ");
        details.push_str(&self.message);
        if !self.inputs.is_empty() {
            let rendered: Vec<&str> = self
                .inputs
                .iter()
                .map(|input| input.as_deref().unwrap_or_default())
                .collect();
            details.push_str(": input: ");
            details.push_str(&rendered.join(", "));
        }
        details.push(']');
        details
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.code, self.message)
    }
}

/// Renders a diagnostic input value.
pub(crate) fn render(value: &(impl fmt::Display + ?Sized)) -> Option<String> {
    Some(value.to_string())
}

// ============================================================================
// TESTS
// ============================================================================
