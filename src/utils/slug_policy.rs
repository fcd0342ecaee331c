//! Slug validation rules.
//!
//! Every slug, whether supplied by the caller or generated, is checked against two
//! independent rules in a fixed order, first failure wins:
//!
//! 1. Length (in characters) must not exceed the configured maximum
//! 2. The slug must match the configured validation pattern

use regex::{Regex, RegexBuilder};

use crate::error::ShortenError;

/// Maximum slug length when `MAX_SLUG_LENGTH` is not set.
pub const DEFAULT_MAX_SLUG_LENGTH: usize = 250;

/// Pattern applied when `SLUG_VALIDATION_REGEX` is not set.
pub const DEFAULT_SLUG_PATTERN: &str = r"^[\d\w-]+$";

/// Number of slug characters echoed back in error messages.
const ECHO_LIMIT: usize = 25;

/// Length and pattern rules for slugs.
#[derive(Debug, Clone)]
pub struct SlugPolicy {
    max_length: usize,
    pattern: Regex,
}

impl SlugPolicy {
    /// Creates a policy from a length limit and a pattern.
    ///
    /// See [`compile_slug_pattern`] for how the pattern is compiled.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the pattern does not compile.
    pub fn new(max_length: usize, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            max_length,
            pattern: compile_slug_pattern(pattern)?,
        })
    }

    /// Checks a slug against the length limit, then the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::SlugTooLong`] or [`ShortenError::SlugInvalid`].
    pub fn validate(&self, slug: &str) -> Result<(), ShortenError> {
        if slug.chars().count() > self.max_length {
            return Err(ShortenError::SlugTooLong {
                slug: slug.to_string(),
                max_length: self.max_length,
            });
        }

        if !self.pattern.is_match(slug) {
            return Err(ShortenError::SlugInvalid {
                slug: slug.to_string(),
                pattern: self.pattern.as_str().to_string(),
            });
        }

        Ok(())
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_SLUG_LENGTH,
            pattern: compile_slug_pattern(DEFAULT_SLUG_PATTERN)
                .expect("default slug pattern compiles"),
        }
    }
}

/// Compiles a slug pattern with ASCII-only `\d`, `\w` and `\s`.
///
/// Slugs end up in URLs, so the shorthand classes keep their ASCII meaning.
/// Patterns that can only be expressed in Unicode mode (for instance negated
/// classes such as `[^/]`) are compiled in Unicode mode instead.
///
/// # Errors
///
/// Returns the Unicode-mode error if neither compilation succeeds.
pub fn compile_slug_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .unicode(false)
        .build()
        .or_else(|_| Regex::new(pattern))
}

/// Shortens a slug for inclusion in a message.
///
/// Keeps the first 25 characters and appends `...` when anything was cut, so
/// arbitrarily large input is never reflected back to the caller.
pub fn truncate_for_display(slug: &str) -> String {
    match slug.char_indices().nth(ECHO_LIMIT) {
        Some((cut, _)) => format!("{}...", &slug[..cut]),
        None => slug.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        let policy = SlugPolicy::default();

        assert!(policy.validate("abc123").is_ok());
        assert!(policy.validate("my-link").is_ok());
        assert!(policy.validate("snake_case").is_ok());
        assert!(policy.validate("UPPER").is_ok());
    }

    #[test]
    fn test_invalid_characters() {
        let policy = SlugPolicy::default();

        for slug in ["bad slug", "slash/y", "dot.ted", "q?x", "emoji🍈", "café"] {
            let result = policy.validate(slug);
            assert!(
                matches!(result, Err(ShortenError::SlugInvalid { .. })),
                "'{}' should be invalid",
                slug
            );
        }
    }

    #[test]
    fn test_empty_slug_is_invalid() {
        let result = SlugPolicy::default().validate("");
        assert!(matches!(result, Err(ShortenError::SlugInvalid { .. })));
    }

    #[test]
    fn test_max_length_boundary() {
        let policy = SlugPolicy::new(10, DEFAULT_SLUG_PATTERN).unwrap();

        assert!(policy.validate(&"a".repeat(10)).is_ok());
        assert!(matches!(
            policy.validate(&"a".repeat(11)),
            Err(ShortenError::SlugTooLong { max_length: 10, .. })
        ));
    }

    #[test]
    fn test_length_checked_before_pattern() {
        let policy = SlugPolicy::new(5, DEFAULT_SLUG_PATTERN).unwrap();

        let result = policy.validate("not valid at all");
        assert!(matches!(result, Err(ShortenError::SlugTooLong { .. })));
    }

    #[test]
    fn test_length_counts_characters() {
        let policy = SlugPolicy::new(3, ".+").unwrap();
        assert!(policy.validate("ñññ").is_ok());
    }

    #[test]
    fn test_custom_pattern() {
        let policy = SlugPolicy::new(250, "^[a-z]+$").unwrap();

        assert!(policy.validate("lower").is_ok());
        assert!(policy.validate("Upper").is_err());
        assert_eq!(policy.pattern(), "^[a-z]+$");
    }

    #[test]
    fn test_negated_class_falls_back_to_unicode() {
        let policy = SlugPolicy::new(250, "^[^/]+$").unwrap();

        assert!(policy.validate("café").is_ok());
        assert!(policy.validate("a/b").is_err());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(SlugPolicy::new(250, "([a-z").is_err());
    }

    #[test]
    fn test_truncate_short_slug() {
        assert_eq!(truncate_for_display("short"), "short");
        assert_eq!(truncate_for_display(&"x".repeat(25)), "x".repeat(25));
    }

    #[test]
    fn test_truncate_long_slug() {
        let slug = "abcdefghijklmnopqrstuvwxyz0123";
        assert_eq!(truncate_for_display(slug), "abcdefghijklmnopqrstuvwxy...");
    }

    #[test]
    fn test_truncate_multibyte() {
        let slug = "é".repeat(30);
        assert_eq!(truncate_for_display(&slug), format!("{}...", "é".repeat(25)));
    }
}
