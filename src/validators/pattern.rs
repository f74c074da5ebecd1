//! Pattern matching validators.

use regex::Regex;

use crate::foundation::Value;

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// Non-string values fail. The pattern is compiled once, at
    /// declaration time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use regex::Regex;
    /// use exodia::foundation::{Validate, Value};
    /// use exodia::validators::matches;
    ///
    /// let v = matches(Regex::new(r"^\d{4}-\d{2}$").unwrap());
    /// assert!(v.check(&Value::from("2024-06")));
    /// assert!(!v.check(&Value::from("junk")));
    /// ```
    pub Matches { pattern: Regex };
    code = "matches";
    rule(self, value, ctx) {
        value.as_str().is_some_and(|s| self.pattern.is_match(s))
    }
    field_message(self, value, field) {
        format!("{field}={value} does not match pattern {}", self.pattern)
    }
    message(self, value) {
        format!("{value} does not match pattern {}", self.pattern)
    }
    fn matches(pattern: Regex);
}

// ============================================================================
// TESTS
// ============================================================================
