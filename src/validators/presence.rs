//! Presence validators.
//!
//! [`Required`] rejects the absence marker; [`Optional`] accepts anything
//! and exists so a field can record an explicit "absence is fine"
//! declaration in its chain.

use crate::foundation::{Validate, ValidationContext, ValidationError, Value};

crate::validator! {
    /// Validates that a value is not absent.
    pub Required;
    code = "required";
    rule(self, value, ctx) { !value.is_null() }
    field_message(self, value, field) { format!("{field} is required") }
    message(self, value) { "got null, but a value is required".to_owned() }
    fn required();
}

// ============================================================================
// OPTIONAL
// ============================================================================

/// Accepts every value, including absence.
///
/// Declaring it marks the field as explicitly optional; the interesting
/// behavior (skipping the rest of the chain on absence) lives in the
/// field's evaluation order, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional;

impl Validate for Optional {
    fn validate(
        &self,
        _value: &Value,
        _ctx: &ValidationContext<'_>,
    ) -> Result<(), ValidationError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Optional"
    }
}

/// Creates an [`Optional`] validator.
#[must_use]
pub const fn optional() -> Optional {
    Optional
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_null_only() {
        let v = required();
        assert!(!v.check(&Value::Null));
        assert!(v.check(&Value::Bool(false)));
        assert!(v.check(&Value::Int(0)));
        assert!(v.check(&Value::from("")));
    }

    #[test]
    fn required_messages() {
        let v = required();
        let bare = v
            .validate(&Value::Null, &ValidationContext::bare())
            .unwrap_err();
        assert_eq!(bare.message, "got null, but a value is required");

        let named = v
            .validate(&Value::Null, &ValidationContext::named("first_name"))
            .unwrap_err();
        assert_eq!(named.message, "first_name is required");
        assert_eq!(named.field.as_deref(), Some("first_name"));
    }

    #[test]
    fn optional_accepts_everything() {
        let v = optional();
        assert!(v.check(&Value::Null));
        assert!(v.check(&Value::from("anything")));
    }
}
