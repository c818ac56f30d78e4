//! String checks.

use regex::Regex;

use super::Context;
use crate::codes;

/// Context over a string value.
pub type StringContext<'a> = Context<'a, str>;

impl Context<'_, str> {
    /// Registers [`TOO_LONG`](crate::codes::TOO_LONG) when the value has
    /// more than `max` characters.
    ///
    /// Length is counted in Unicode scalar values, not bytes.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_when_longer_than(mut self, max: usize) -> Self {
        if self.value.is_some_and(|value| value.chars().count() > max) {
            self.register_failure_with_value(codes::TOO_LONG, "too long");
        }
        self.warn_when_not_optional();
        self
    }

    /// Registers [`MISMATCH`](crate::codes::MISMATCH) unless the whole value
    /// matches `pattern`.
    ///
    /// An absent value counts as a mismatch unless the context is optional.
    /// Any match spanning the entire value is accepted, so `a|ab` matches
    /// `"ab"` and `\d+?` matches `"123"`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let digits = Regex::new(r"\d+")?;
    /// ctx.fail_when_not_matching(&digits);
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_when_not_matching(self, pattern: &Regex) -> Self {
        self.mismatch_when(|value| !matches_whole(pattern, value))
    }

    /// Registers [`MISMATCH`](crate::codes::MISMATCH) when the value is one
    /// of `items`. An absent value counts as a mismatch unless the context is
    /// optional.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_when_in<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.mismatch_when(|value| items.into_iter().any(|item| item.as_ref() == value))
    }

    /// Registers [`MISMATCH`](crate::codes::MISMATCH) when the value is not
    /// one of `items`. An absent value counts as a mismatch unless the
    /// context is optional.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_when_not_in<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.mismatch_when(|value| !items.into_iter().any(|item| item.as_ref() == value))
    }

    /// Registers [`MISMATCH`](crate::codes::MISMATCH) when the value is
    /// absent or empty, whether or not the context is optional.
    #[must_use = "builder methods must be chained or built"]
    pub fn fail_when_missing_or_empty(mut self) -> Self {
        if self.value.is_none_or(str::is_empty) {
            self.register_failure_with_value(codes::MISMATCH, "not matching");
        }
        self
    }

    /// Shared rule of the pattern and set checks: an absent value fails
    /// unless optional, a present value fails when `rejects` holds. No
    /// optionality warning is added.
    fn mismatch_when(mut self, rejects: impl FnOnce(&str) -> bool) -> Self {
        let failed = match self.value {
            Some(value) => rejects(value),
            None => !self.optional,
        };
        if failed {
            self.register_failure_with_value(codes::MISMATCH, "not matching");
        }
        self
    }
}

/// Returns true if some match of `pattern` spans all of `value`.
fn matches_whole(pattern: &Regex, value: &str) -> bool {
    match Regex::new(&format!(r"\A(?:{})\z", pattern.as_str())) {
        Ok(anchored) => anchored.is_match(value),
        Err(error) => {
            tracing::warn!(
                pattern = pattern.as_str(),
                error = %error,
                "anchored pattern rejected; falling back to leftmost match"
            );
            pattern
                .find(value)
                .is_some_and(|m| m.start() == 0 && m.end() == value.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Registration;
    use rstest::rstest;

    fn string(value: Option<&str>) -> StringContext<'_> {
        StringContext::with_path("firstname", "order.customer", "order.customer.firstname", value)
    }

    fn codes_of(ctx: StringContext<'_>) -> Vec<String> {
        ctx.into_result()
            .into_iter()
            .map(|r| r.code().to_owned())
            .collect()
    }

    #[rstest]
    #[case("1234567890", false)]
    #[case("12345678901", true)]
    #[case("", false)]
    #[case("ææææææææææ", false)]
    fn longer_than_ten(#[case] value: &str, #[case] fails: bool) {
        let result = string(Some(value)).fail_when_longer_than(10).into_result();
        assert_eq!(result.has_validation_code(codes::TOO_LONG), fails);
        assert!(!result.has_warning());
    }

    #[test]
    fn too_long_records_value_and_location() {
        let result = string(Some("Bartholomew")).fail_when_longer_than(10).into_result();
        let registration = result.find_validation_code(codes::TOO_LONG);

        assert_eq!(registration.map(Registration::message), Some("too long"));
        assert_eq!(
            registration.map(Registration::inputs),
            Some(&[Some("Bartholomew".to_owned())][..])
        );
        assert_eq!(
            registration.map(Registration::location),
            Some("order.customer.firstname")
        );
    }

    #[test]
    fn too_long_on_absent_value_only_warns() {
        assert_eq!(
            codes_of(string(None).fail_when_longer_than(10)),
            [codes::NOT_MARKED_AS_OPTIONAL]
        );
        assert!(codes_of(string(None).as_optional().fail_when_longer_than(10)).is_empty());
    }

    #[rstest]
    #[case(r"\d+", Some("12345"), false, false)]
    #[case(r"\d+", Some("12a45"), false, true)]
    #[case(r"\d+", Some("a12345"), false, true)]
    #[case(r"\d+", None, false, true)]
    #[case(r"\d+", None, true, false)]
    #[case(r"\d+?", Some("123"), false, false)]
    #[case("a|ab", Some("ab"), false, false)]
    #[case("a|ab", Some("abc"), false, true)]
    #[case("^a", Some("ab"), false, true)]
    fn not_matching(
        #[case] pattern: &str,
        #[case] value: Option<&str>,
        #[case] optional: bool,
        #[case] fails: bool,
    ) {
        let pattern = Regex::new(pattern).unwrap();
        let ctx = if optional { string(value).as_optional() } else { string(value) };
        let result = ctx.fail_when_not_matching(&pattern).into_result();

        assert_eq!(result.has_validation_code(codes::MISMATCH), fails);
        assert!(!result.has_warning());
    }

    #[test]
    fn mismatch_on_absent_value_records_null_input() {
        let digits = Regex::new(r"\d+").unwrap();
        let result = string(None).fail_when_not_matching(&digits).into_result();

        assert_eq!(
            result.find_validation_code(codes::MISMATCH).map(Registration::inputs),
            Some(&[None][..])
        );
    }

    #[rstest]
    #[case(Some("DK"), false)]
    #[case(Some("SE"), true)]
    #[case(None, true)]
    fn not_in_allowed_countries(#[case] value: Option<&str>, #[case] fails: bool) {
        let result = string(value).fail_when_not_in(["DK", "NO"]).into_result();
        assert_eq!(result.has_validation_code(codes::MISMATCH), fails);
    }

    #[rstest]
    #[case(Some("root"), true)]
    #[case(Some("alice"), false)]
    #[case(None, true)]
    fn in_reserved_names(#[case] value: Option<&str>, #[case] fails: bool) {
        let reserved = vec!["root".to_owned(), "admin".to_owned()];
        let result = string(value).fail_when_in(&reserved).into_result();
        assert_eq!(result.has_validation_code(codes::MISMATCH), fails);
    }

    #[test]
    fn set_checks_skip_optional_absent_value() {
        assert!(codes_of(string(None).as_optional().fail_when_in(["x"])).is_empty());
        assert!(codes_of(string(None).as_optional().fail_when_not_in(["x"])).is_empty());
    }

    #[rstest]
    #[case(None, false, true)]
    #[case(None, true, true)]
    #[case(Some(""), true, true)]
    #[case(Some(" "), false, false)]
    fn missing_or_empty_ignores_optional(
        #[case] value: Option<&str>,
        #[case] optional: bool,
        #[case] fails: bool,
    ) {
        let ctx = if optional { string(value).as_optional() } else { string(value) };
        let result = ctx.fail_when_missing_or_empty().into_result();

        assert_eq!(result.has_validation_code(codes::MISMATCH), fails);
        assert!(!result.has_warning());
        if fails {
            assert_eq!(
                result.find_validation_code(codes::MISMATCH).map(Registration::message),
                Some("not matching")
            );
        }
    }

    #[test]
    fn empty_string_is_not_missing() {
        let result = string(Some("")).fail_when_missing().into_result();
        assert!(result.is_empty());
    }
}
