//! Collection checks and per-element descent.
//!
//! Any `C` whose shared reference is iterable qualifies: `Vec<T>`, `[T]`,
//! `BTreeSet<T>`, `HashMap<K, V>` and so on. Elements are visited in the
//! collection's own iteration order.

use super::Context;
use crate::codes;
use crate::foundation::ValidationResult;

/// Context over a collection value.
pub type CollectionContext<'a, C> = Context<'a, C>;

impl<'a, C> Context<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    /// Registers [`IS_EMPTY`](crate::codes::IS_EMPTY) when the collection is
    /// present and has no elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_when_empty(mut self) -> Self {
        if self.value.is_some_and(|values| values.into_iter().next().is_none()) {
            self.result
                .register_failure(codes::IS_EMPTY, "is empty", vec![Some("[]".to_owned())]);
        }
        self.warn_when_not_optional();
        self
    }

    /// Runs `validator` once per element.
    ///
    /// Every element context is named `name`, shares the collection's
    /// complete path as its parent path, and is located at
    /// `{complete_path}[{index}]`. Each element result is nested
    /// individually.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// ctx.validate_each_item("orderline", |line| {
    ///     line.validate_string_field("itemCode", |l| l.item_code.as_deref(), 10, Required::Mandatory)
    ///         .into_result()
    /// })
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn validate_each_item<T, F>(mut self, name: &str, validator: F) -> Self
    where
        T: ?Sized + 'a,
        &'a C: IntoIterator<Item = &'a T>,
        F: FnMut(Context<'a, T>) -> ValidationResult,
    {
        if let Some(values) = self.value {
            self.each_element(name, values.into_iter().map(Some), validator);
        }
        self.warn_when_not_optional();
        self
    }

    /// Like [`validate_each_item`](Self::validate_each_item), but the
    /// validator returns the element context itself.
    #[must_use = "builder methods must be chained or built"]
    pub fn evaluate_each_item<T, F>(self, name: &str, mut validator: F) -> Self
    where
        T: ?Sized + 'a,
        &'a C: IntoIterator<Item = &'a T>,
        F: FnMut(Context<'a, T>) -> Context<'a, T>,
    {
        self.validate_each_item(name, |element| validator(element).into_result())
    }

    /// Per-element descent over a collection of `Option<T>`.
    ///
    /// A `None` element becomes an absent element context, so element
    /// checks see it exactly like an absent field.
    #[must_use = "builder methods must be chained or built"]
    pub fn validate_each_option_item<T, F>(mut self, name: &str, validator: F) -> Self
    where
        T: 'a,
        &'a C: IntoIterator<Item = &'a Option<T>>,
        F: FnMut(Context<'a, T>) -> ValidationResult,
    {
        if let Some(values) = self.value {
            self.each_element(name, values.into_iter().map(Option::as_ref), validator);
        }
        self.warn_when_not_optional();
        self
    }

    /// Like [`validate_each_option_item`](Self::validate_each_option_item),
    /// but the validator returns the element context itself.
    #[must_use = "builder methods must be chained or built"]
    pub fn evaluate_each_option_item<T, F>(self, name: &str, mut validator: F) -> Self
    where
        T: 'a,
        &'a C: IntoIterator<Item = &'a Option<T>>,
        F: FnMut(Context<'a, T>) -> Context<'a, T>,
    {
        self.validate_each_option_item(name, |element| validator(element).into_result())
    }
}
