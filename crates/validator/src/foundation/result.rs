//! The validation result tree.
//!
//! A [`ValidationResult`] is an ordered accumulator of [`Entry`] values:
//! either a [`Registration`] raised at this level, or a nested result merged
//! from a child level. Insertion order is the report order and decides which
//! failure is "first".
//!
//! Nested results keep their own path identity. The flattened view
//! ([`ValidationResult::iter`]) walks the tree lazily, depth first.

use std::borrow::Cow;
use std::fmt;

use crate::conclusion::{Conclusion, ConclusionGuard};
use crate::foundation::error::ValidationError;
use crate::foundation::iter::{IntoRegistrations, Registrations};
use crate::foundation::registration::{Registration, Severity};

/// Placeholder used for results that are not attached to a context.
const DETACHED: &str = "N/A";

// ============================================================================
// ENTRY
// ============================================================================

/// One element of a result: a leaf registration or a nested sub-result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Entry {
    Registration(Registration),
    Result(ValidationResult),
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registration(registration) => fmt::Display::fmt(registration, f),
            Self::Result(result) => fmt::Display::fmt(result, f),
        }
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Ordered, appendable tree of validation findings for one context level
/// and its descendants.
///
/// # Examples
///
/// ```rust,ignore
/// use waypoint_validator::foundation::ValidationResult;
///
/// let mut result = ValidationResult::rooted("order");
/// result.register_null_validation("11", "input is null");
/// result.register_failure("12", "input contains test", vec![Some("test".into())]);
///
/// assert!(result.has_failure());
/// assert_eq!(result.find_validation_code("12").map(|r| r.message()), Some("input contains test"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationResult {
    context: String,
    context_path: String,
    location: String,
    entries: Vec<Entry>,
}

impl Default for ValidationResult {
    /// A detached result whose context, path and location are all `"N/A"`.
    fn default() -> Self {
        Self::new(DETACHED, DETACHED, DETACHED)
    }
}

impl ValidationResult {
    /// Creates an empty result for the level `context`, whose parent level
    /// has the complete path `context_path`.
    pub fn new(
        context: impl Into<String>,
        context_path: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            context_path: context_path.into(),
            location: location.into(),
            entries: Vec::new(),
        }
    }

    /// Creates an empty root result: no parent path, location equal to the name.
    pub fn rooted(context: impl Into<String>) -> Self {
        let context = context.into();
        Self::new(context.clone(), "", context)
    }

    /// Name of this level, e.g. `"customer"`.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Complete path of the parent level (excludes this level's name).
    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    /// Index-aware path of the value this level checks.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Dotted path from the root to this level, ignoring collection indices.
    ///
    /// An empty parent path is skipped, so a root result's complete path is
    /// its own name.
    pub fn complete_path(&self) -> String {
        if self.context_path.is_empty() {
            self.context.clone()
        } else if self.context.is_empty() {
            self.context_path.clone()
        } else {
            format!("{}.{}", self.context_path, self.context)
        }
    }

    /// Direct entries of this level, nested results unflattened.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Returns true if no registration exists anywhere in the tree.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Appends a registration as-is.
    pub fn register(&mut self, registration: Registration) -> &mut Self {
        self.entries.push(Entry::Registration(registration));
        self
    }

    /// Appends a child result as a nested entry, keeping its path identity.
    ///
    /// The child is flattened lazily whenever this result is iterated.
    pub fn register_result(&mut self, result: ValidationResult) -> &mut Self {
        self.entries.push(Entry::Result(result));
        self
    }

    /// Appends every flattened registration of `other` individually.
    ///
    /// Unlike [`register_result`](Self::register_result), no sub-tree
    /// boundary survives: the registrations become direct entries of `self`.
    pub fn register_all(&mut self, other: ValidationResult) -> &mut Self {
        self.entries
            .extend(other.into_iter().map(Entry::Registration));
        self
    }

    /// Registers the canonical "is missing" failure with no inputs.
    pub fn register_null_validation(
        &mut self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        self.register_with_severity(code, message, Severity::Failure, Vec::new())
    }

    /// Registers a failure located at this level.
    pub fn register_failure(
        &mut self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        inputs: Vec<Option<String>>,
    ) -> &mut Self {
        self.register_with_severity(code, message, Severity::Failure, inputs)
    }

    /// Registers a warning located at this level.
    pub fn register_warning(
        &mut self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        inputs: Vec<Option<String>>,
    ) -> &mut Self {
        self.register_with_severity(code, message, Severity::Warning, inputs)
    }

    fn register_with_severity(
        &mut self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        severity: Severity,
        inputs: Vec<Option<String>>,
    ) -> &mut Self {
        let registration = Registration::new(code, message, severity)
            .at(
                self.context.clone(),
                self.location.clone(),
                self.complete_path(),
            )
            .with_inputs(inputs);
        self.register(registration)
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Lazy depth-first view of every registration in the tree.
    pub fn iter(&self) -> Registrations<'_> {
        Registrations::new(&self.entries)
    }

    pub fn has_failure(&self) -> bool {
        self.iter().any(Registration::is_failure)
    }

    pub fn has_warning(&self) -> bool {
        self.iter().any(Registration::is_warning)
    }

    /// First registration carrying `code`, depth first in insertion order.
    pub fn find_validation_code(&self, code: &str) -> Option<&Registration> {
        self.iter().find(|registration| registration.code() == code)
    }

    pub fn has_validation_code(&self, code: &str) -> bool {
        self.find_validation_code(code).is_some()
    }

    /// First registration with [`Severity::Failure`].
    pub fn first_failure(&self) -> Option<&Registration> {
        self.iter().find(|registration| registration.is_failure())
    }

    /// Detail strings of every registration, in report order.
    pub fn all_details(&self) -> Vec<String> {
        self.iter().map(Registration::details).collect()
    }

    /// [`all_details`](Self::all_details) joined with `", "`.
    pub fn all_details_as_string(&self) -> String {
        self.all_details().join(", ")
    }

    // ------------------------------------------------------------------------
    // Escalation
    // ------------------------------------------------------------------------

    /// Hands a [`Conclusion`] over this result to `f` and returns its verdict.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// result.conclude(|conclusion| conclusion.fail_on_first_failure())?;
    /// ```
    pub fn conclude<'r, F>(&'r self, f: F) -> Result<(), ValidationError>
    where
        F: FnOnce(Conclusion<'r>) -> Result<Conclusion<'r>, ValidationError>,
    {
        f(Conclusion::new(self)).map(|_| ())
    }

    /// Wraps this result in a guard that fails on close if any failure exists.
    pub fn guard(self) -> ConclusionGuard {
        ConclusionGuard::new(self)
    }

    /// Renders the tree as JSON, nested results included.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let entries: Vec<serde_json::Value> = self
            .entries
            .iter()
            .map(|entry| match entry {
                Entry::Registration(registration) => json!({
                    "kind": "registration",
                    "code": registration.code(),
                    "message": registration.message(),
                    "severity": registration.severity(),
                    "context": registration.context(),
                    "location": registration.location(),
                    "context_path": registration.context_path(),
                    "inputs": registration.inputs(),
                }),
                Entry::Result(result) => {
                    let mut value = result.to_json_value();
                    if let Some(object) = value.as_object_mut() {
                        object.insert("kind".into(), json!("result"));
                    }
                    value
                }
            })
            .collect();

        json!({
            "context": self.context,
            "context_path": self.context_path,
            "location": self.location,
            "entries": entries,
        })
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}:", self.context)?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(entry, f)?;
        }
        f.write_str("}")
    }
}

impl<'r> IntoIterator for &'r ValidationResult {
    type Item = &'r Registration;
    type IntoIter = Registrations<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ValidationResult {
    type Item = Registration;
    type IntoIter = IntoRegistrations;

    fn into_iter(self) -> Self::IntoIter {
        IntoRegistrations::new(self.entries)
    }
}

// ============================================================================
// TESTS
// ============================================================================
