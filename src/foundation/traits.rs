//! Core traits for the validation system.
//!
//! [`Validate`] is the atomic protocol every check honors; anything that
//! implements it — built-in, combinator, `Stack`, `Field`, or user code —
//! composes with everything else. No base type is required beyond the
//! trait itself.

use crate::foundation::{ValidationContext, ValidationError, Value};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Two invocation styles coexist:
///
/// * [`validate`](Validate::validate) — raises on failure (returns
///   `Err(ValidationError)`), so chained validators can short-circuit with
///   field context attached;
/// * [`check`](Validate::check) — the bare pass/fail call form for ad hoc,
///   non-field validation. Context-free, never fails with a reason.
///
/// The trait is object-safe: validator chains store `Box<dyn Validate>`.
///
/// # Examples
///
/// ```rust
/// use exodia::foundation::{Validate, ValidationContext, ValidationError, Value};
///
/// struct Even;
///
/// impl Validate for Even {
///     fn validate(
///         &self,
///         value: &Value,
///         ctx: &ValidationContext<'_>,
///     ) -> Result<(), ValidationError> {
///         if value.as_i64().is_some_and(|n| n % 2 == 0) {
///             Ok(())
///         } else {
///             Err(ctx.failure("even", format!("{value} is not even")))
///         }
///     }
///
///     fn name(&self) -> &'static str {
///         "Even"
///     }
/// }
///
/// assert!(Even.check(&Value::from(4)));
/// assert!(!Even.check(&Value::from(3)));
/// ```
pub trait Validate: Send + Sync {
    /// Validates the value in the given context.
    ///
    /// Returns `Ok(())` on success; on failure, a [`ValidationError`]
    /// qualified with the context's field path when one is present.
    fn validate(&self, value: &Value, ctx: &ValidationContext<'_>) -> Result<(), ValidationError>;

    /// Bare boolean call form: pass/fail with no context and no reason.
    fn check(&self, value: &Value) -> bool {
        self.validate(value, &ValidationContext::bare()).is_ok()
    }

    /// The validator's kind name, e.g. `"MinLength"`.
    ///
    /// Field declarations use it to reject two validators of the same kind
    /// on one field.
    fn name(&self) -> &'static str;
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, value: &Value, ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        (**self).validate(value, ctx)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
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
pub trait ValidateExt: Validate + Sized {
    /// Both validators must pass; short-circuits on the first failure.
    fn and<V: Validate>(self, other: V) -> And<Self, V> {
        And::new(self, other)
    }

    /// At least one validator must pass; short-circuits on the first
    /// success.
    fn or<V: Validate>(self, other: V) -> Or<Self, V> {
        Or::new(self, other)
    }

    /// Inverts the validator.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::{And, Not, Or};

// ============================================================================
// TESTS
// ============================================================================
