//! OR combinator — at least one validator must pass.

use crate::foundation::{Validate, ValidationContext, ValidationError, Value};

/// Combines two validators with logical OR.
///
/// Short-circuits on the first success; when both fail, the right
/// validator's error is reported.
///
/// # Examples
///
/// ```rust
/// use exodia::prelude::*;
///
/// let validator = length(5).or(length(10));
/// assert!(validator.check(&Value::from("hello")));
/// assert!(!validator.check(&Value::from("hi")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new OR combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L: Validate, R: Validate> Validate for Or<L, R> {
    fn validate(&self, value: &Value, ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        match self.left.validate(value, ctx) {
            Ok(()) => Ok(()),
            Err(_) => self.right.validate(value, ctx),
        }
    }

    fn name(&self) -> &'static str {
        "Or"
    }
}

/// Creates an OR combinator from two validators.
pub const fn or<L, R>(left: L, right: R) -> Or<L, R> {
    Or::new(left, right)
}
