//! Injectable construction of root contexts.

use super::Context;

/// Creates root contexts.
///
/// The method is generic, so services hold a factory as a type parameter
/// (`F: ValidationFactory`) rather than as a trait object.
pub trait ValidationFactory {
    /// Wraps `value` in a root context named `context`.
    fn validate<'a, T: ?Sized>(&self, context: &str, value: Option<&'a T>) -> Context<'a, T>;
}

/// The plain factory: [`Context::new`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValidationFactory;

impl ValidationFactory for DefaultValidationFactory {
    fn validate<'a, T: ?Sized>(&self, context: &str, value: Option<&'a T>) -> Context<'a, T> {
        Context::new(context, value)
    }
}
