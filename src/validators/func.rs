//! Closure-backed validators.

use std::fmt;

use crate::foundation::{Validate, ValidationContext, ValidationError, Value};

/// Wraps an arbitrary predicate as a validator.
///
/// The escape hatch for one-off rules that do not deserve a named
/// validator type. The message is supplied at declaration time and
/// rendered in both field-qualified and bare forms.
///
/// # Examples
///
/// ```rust
/// use exodia::foundation::{Validate, Value};
/// use exodia::validators::predicate;
///
/// let even = predicate(
///     |v| v.as_i64().is_some_and(|n| n % 2 == 0),
///     "must be even",
/// );
/// assert!(even.check(&Value::from(4)));
/// assert!(!even.check(&Value::from(3)));
/// ```
pub struct Predicate {
    rule: Box<dyn Fn(&Value) -> bool + Send + Sync>,
    message: String,
}

impl Predicate {
    #[must_use]
    pub fn new(
        rule: impl Fn(&Value) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: Box::new(rule),
            message: message.into(),
        }
    }
}

impl Validate for Predicate {
    fn validate(&self, value: &Value, ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        if (self.rule)(value) {
            Ok(())
        } else {
            let message = match ctx.field_name() {
                Some(field) => format!("{field}={value} {}", self.message),
                None => format!("{value} {}", self.message),
            };
            Err(ctx.failure("predicate", message))
        }
    }

    fn name(&self) -> &'static str {
        "Predicate"
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Creates a [`Predicate`] validator.
#[must_use]
pub fn predicate(
    rule: impl Fn(&Value) -> bool + Send + Sync + 'static,
    message: impl Into<String>,
) -> Predicate {
    Predicate::new(rule, message)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_runs_the_closure() {
        let v = predicate(|v| v.as_str().is_some_and(|s| s.starts_with('a')), "bad");
        assert!(v.check(&Value::from("abc")));
        assert!(!v.check(&Value::from("xyz")));
    }

    #[test]
    fn message_forms() {
        let v = predicate(|_| false, "must start with 'a'");

        let bare = v
            .validate(&Value::from("xyz"), &ValidationContext::bare())
            .unwrap_err();
        assert_eq!(bare.code, "predicate");
        assert_eq!(bare.message, "xyz must start with 'a'");

        let named = v
            .validate(&Value::from("xyz"), &ValidationContext::named("nick"))
            .unwrap_err();
        assert_eq!(named.message, "nick=xyz must start with 'a'");
        assert_eq!(named.field.as_deref(), Some("nick"));
    }
}
