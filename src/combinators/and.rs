//! AND combinator — both validators must pass.

use crate::foundation::{Validate, ValidationContext, ValidationError, Value};

/// Combines two validators with logical AND.
///
/// Short-circuits on the first failure, so the left validator's error is
/// reported when both would fail.
///
/// # Examples
///
/// ```rust
/// use exodia::prelude::*;
///
/// let validator = min_length(3).and(max_length(10));
/// assert!(validator.check(&Value::from("hello")));
/// assert!(!validator.check(&Value::from("hi")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new AND combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L: Validate, R: Validate> Validate for And<L, R> {
    fn validate(&self, value: &Value, ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        self.left.validate(value, ctx)?;
        self.right.validate(value, ctx)
    }

    fn name(&self) -> &'static str {
        "And"
    }
}

/// Creates an AND combinator from two validators.
pub const fn and<L, R>(left: L, right: R) -> And<L, R> {
    And::new(left, right)
}
