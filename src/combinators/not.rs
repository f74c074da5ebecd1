//! NOT combinator — inverts a validator.

use crate::foundation::{Validate, ValidationContext, ValidationError, Value};

/// Inverts a validator: succeeds when the inner validator fails.
///
/// # Examples
///
/// ```rust
/// use exodia::prelude::*;
///
/// let validator = one_of(["BIG", "SMALL"]).not();
/// assert!(validator.check(&Value::from("MEDIUM")));
/// assert!(!validator.check(&Value::from("BIG")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    /// Creates a new NOT combinator.
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V: Validate> Validate for Not<V> {
    fn validate(&self, value: &Value, ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        match self.inner.validate(value, ctx) {
            Ok(()) => Err(ctx.failure(
                "not",
                format!("{value} satisfies {}, but must not", self.inner.name()),
            )),
            Err(_) => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "Not"
    }
}

/// Creates a NOT combinator around a validator.
pub const fn not<V>(inner: V) -> Not<V> {
    Not::new(inner)
}
