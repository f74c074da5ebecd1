//! Runtime type validators.
//!
//! [`OfType`] checks a value's runtime kind against a declared kind set
//! and produces the engine's canonical type-mismatch diagnostics. Every
//! typed field seeds its evaluation with one of these.

use crate::foundation::{Validate, ValidationContext, ValidationError, Value, ValueKind};

// ============================================================================
// OF TYPE
// ============================================================================

/// Validates that a value's runtime kind is one of a declared set.
///
/// The failure message names both the actual and the expected kinds, and
/// is field-qualified or value-qualified depending on invocation context.
///
/// # Examples
///
/// ```rust
/// use exodia::foundation::{Validate, Value, ValueKind};
/// use exodia::validators::OfType;
///
/// let v = OfType::new(ValueKind::Integer);
/// assert!(v.check(&Value::from(2)));
/// assert!(!v.check(&Value::from("2")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfType {
    kinds: Vec<ValueKind>,
}

impl OfType {
    /// Type check against a single kind.
    #[must_use]
    pub fn new(kind: ValueKind) -> Self {
        Self { kinds: vec![kind] }
    }

    /// Type check against a set of kinds.
    #[must_use]
    pub fn any_of(kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// The declared kind set.
    #[must_use]
    pub fn kinds(&self) -> &[ValueKind] {
        &self.kinds
    }

    /// Comma-joined kind names for diagnostics.
    #[must_use]
    pub fn expected(&self) -> String {
        self.kinds
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Validate for OfType {
    fn validate(&self, value: &Value, ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        if self.kinds.contains(&value.kind()) {
            Ok(())
        } else {
            Err(ValidationError::type_mismatch(
                ctx.field_name(),
                value,
                &self.expected(),
            ))
        }
    }

    fn name(&self) -> &'static str {
        "OfType"
    }
}

/// Creates an [`OfType`] validator for a single kind.
#[must_use]
pub fn of_type(kind: ValueKind) -> OfType {
    OfType::new(kind)
}

// ============================================================================
// IS DATE
// ============================================================================

crate::validator! {
    /// Validates that a value is a date, or an ISO-8601 date string.
    ///
    /// Date fields accept the string form because dates have no native
    /// representation in data arriving as JSON.
    pub IsDate;
    code = "date";
    rule(self, value, ctx) { value.as_date().is_some() }
    field_message(self, value, field) { format!("{field}={value} is not a valid date") }
    message(self, value) { format!("{value} is not a valid date") }
    fn is_date();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_kind() {
        let v = of_type(ValueKind::String);
        assert!(v.check(&Value::from("x")));
        assert!(!v.check(&Value::from(1)));
    }

    #[test]
    fn kind_set() {
        let v = OfType::any_of([ValueKind::Integer, ValueKind::Float]);
        assert!(v.check(&Value::from(1)));
        assert!(v.check(&Value::from(1.5)));
        assert!(!v.check(&Value::from("1")));
    }

    #[test]
    fn mismatch_messages_follow_invocation_context() {
        let v = of_type(ValueKind::String);

        let bare = v
            .validate(&Value::from(2), &ValidationContext::bare())
            .unwrap_err();
        assert_eq!(bare.message, "2 is of type Integer, expected types String");

        let named = v
            .validate(&Value::from(2), &ValidationContext::named("first_name"))
            .unwrap_err();
        assert_eq!(
            named.message,
            "first_name=2 is of type Integer, expected types String"
        );
    }

    #[test]
    fn expected_joins_kind_names() {
        let v = OfType::any_of([ValueKind::Date, ValueKind::String]);
        assert_eq!(v.expected(), "Date, String");
    }

    #[test]
    fn is_date_accepts_both_forms() {
        let v = is_date();
        assert!(v.check(&Value::from("1970-01-01")));
        assert!(!v.check(&Value::from("not a date")));
        assert!(!v.check(&Value::from(3)));
    }
}
