//! Temporal bound checks.
//!
//! All bounds are inclusive: a value equal to a bound is neither "before"
//! nor "after" it, and is "between" `begin` and `end`.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use super::Context;
use crate::codes;

/// A point in time that can be ordered against bounds and rendered into a
/// registration.
pub trait Temporal: PartialOrd + fmt::Display {}

impl Temporal for NaiveDate {}
impl Temporal for NaiveTime {}
impl Temporal for NaiveDateTime {}
impl<Tz> Temporal for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
}

/// Context over a temporal value.
pub type TemporalContext<'a, T> = Context<'a, T>;

impl<T: Temporal> Context<'_, T> {
    /// Registers [`BEFORE_TEMPORAL`](crate::codes::BEFORE_TEMPORAL) when the
    /// value lies strictly before `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_when_before(self, bound: &T) -> Self {
        self.fail_when_out_of_order(|value| value < bound, codes::BEFORE_TEMPORAL, "before")
    }

    /// Registers [`AFTER_TEMPORAL`](crate::codes::AFTER_TEMPORAL) when the
    /// value lies strictly after `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_when_after(self, bound: &T) -> Self {
        self.fail_when_out_of_order(|value| value > bound, codes::AFTER_TEMPORAL, "after")
    }

    /// Registers [`BETWEEN_TEMPORAL`](crate::codes::BETWEEN_TEMPORAL) when
    /// `begin <= value <= end`.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_when_between(self, begin: &T, end: &T) -> Self {
        self.fail_when_out_of_order(
            |value| within(value, begin, end),
            codes::BETWEEN_TEMPORAL,
            "between",
        )
    }

    /// Registers [`NOT_BETWEEN_TEMPORAL`](crate::codes::NOT_BETWEEN_TEMPORAL)
    /// unless `begin <= value <= end`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// ctx.validate_temporal("orderDate", |o| o.order_date.as_ref(), |date| {
    ///     date.fail_when_not_between(&opening, &closing).into_result()
    /// })
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_when_not_between(self, begin: &T, end: &T) -> Self {
        self.fail_when_out_of_order(
            |value| !within(value, begin, end),
            codes::NOT_BETWEEN_TEMPORAL,
            "not in between",
        )
    }

    fn fail_when_out_of_order(
        mut self,
        rejects: impl FnOnce(&T) -> bool,
        code: &'static str,
        message: &'static str,
    ) -> Self {
        if self.value.is_some_and(rejects) {
            self.register_failure_with_value(code, message);
        }
        self.warn_when_not_optional();
        self
    }
}

fn within<T: PartialOrd>(value: &T, begin: &T, end: &T) -> bool {
    begin <= value && value <= end
}
