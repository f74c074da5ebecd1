//! STACK combinator — an ordered sequence of validators over one value.
//!
//! A [`Stack`] runs its validators in declaration order and fails fast:
//! the first failing validator determines the reported reason. It never
//! aggregates multiple failures into one report; aggregation, where it
//! exists at all, lives at the whole-object level.

use crate::foundation::{Validate, ValidationContext, ValidationError, Value};

// ============================================================================
// STACK
// ============================================================================

/// An ordered, fail-fast sequence of validators.
///
/// A `Stack` is itself a [`Validate`] and is substitutable anywhere a
/// validator is expected. An empty stack always passes.
///
/// # Examples
///
/// ```rust
/// use exodia::combinators::Stack;
/// use exodia::foundation::{Validate, Value};
/// use exodia::validators::{min_length, max_length};
///
/// let stack = Stack::new().with(min_length(3)).with(max_length(10));
/// assert!(stack.check(&Value::from("hello")));
/// assert!(!stack.check(&Value::from("hi")));
/// ```
#[derive(Default)]
pub struct Stack {
    validators: Vec<Box<dyn Validate>>,
}

impl Stack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Appends a validator, builder-style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, validator: impl Validate + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Appends a validator in place.
    pub fn push(&mut self, validator: impl Validate + 'static) {
        self.validators.push(Box::new(validator));
    }

    /// Number of validators in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// True if the stack holds no validators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// True if the stack already holds a validator of the given kind name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.validators.iter().any(|v| v.name() == name)
    }

    /// Kind names of the stacked validators, in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.validators.iter().map(|v| v.name())
    }
}

impl Validate for Stack {
    fn validate(&self, value: &Value, ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(value, ctx)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Stack"
    }
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
