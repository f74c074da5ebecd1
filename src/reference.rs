//! Cross-field references.
//!
//! A [`Reference`] compares the field under validation against another
//! field of the same instance. The target is either another field's
//! identity, captured directly from its builder, or a name resolved
//! lazily at validation time, so a field may reference one declared
//! after it.
//!
//! References resolve through the [`Scope`](crate::foundation::Scope)
//! the validation context carries. Evaluating a reference without a
//! scope is an error, not a pass: a schema whose references can never
//! resolve is misdeclared.

use std::borrow::Cow;
use std::fmt;

use crate::field::Field;
use crate::foundation::{FieldId, ValidationContext, ValidationError, Value};

// ============================================================================
// REF TARGET
// ============================================================================

/// What a reference points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefTarget {
    /// Another field's identity, captured at declaration time. Resolved to
    /// a name through the owning schema.
    Direct(FieldId),

    /// A field name, resolved at validation time. Permits forward
    /// references to fields declared later.
    Deferred(Cow<'static, str>),
}

impl From<&Field> for RefTarget {
    fn from(field: &Field) -> Self {
        Self::Direct(field.id())
    }
}

impl From<&'static str> for RefTarget {
    fn from(name: &'static str) -> Self {
        Self::Deferred(Cow::Borrowed(name))
    }
}

impl From<String> for RefTarget {
    fn from(name: String) -> Self {
        Self::Deferred(Cow::Owned(name))
    }
}

// ============================================================================
// REFERENCE
// ============================================================================

/// A declared comparison against another field of the owning instance.
///
/// The predicate receives the value under validation first and the
/// target's current value second. The message fragment describes the
/// expected relation ("must be less than", "must equal") and is composed
/// with both sides in the failure.
pub struct Reference {
    target: RefTarget,
    predicate: Box<dyn Fn(&Value, &Value) -> bool + Send + Sync>,
    message: String,
}

impl Reference {
    pub fn new(
        target: impl Into<RefTarget>,
        predicate: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    /// The declared target.
    #[must_use]
    pub fn target(&self) -> &RefTarget {
        &self.target
    }

    /// Resolves the target and applies the predicate.
    ///
    /// Fails with `unresolved_reference` when the context carries no
    /// scope, `unknown_reference_target` when the scope does not expose
    /// the target, and `reference_failed` when the predicate rejects.
    pub fn evaluate(
        &self,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), ValidationError> {
        let Some(scope) = ctx.scope() else {
            return Err(qualify(ValidationError::unresolved_reference(), ctx));
        };

        let target_name = match &self.target {
            RefTarget::Direct(id) => match scope.name_of(*id) {
                Some(name) => name,
                None => {
                    return Err(qualify(
                        ValidationError::unknown_reference_target("<undeclared field>"),
                        ctx,
                    ));
                }
            },
            RefTarget::Deferred(name) => name.as_ref(),
        };

        let Some(target_value) = scope.value_of(target_name) else {
            return Err(qualify(
                ValidationError::unknown_reference_target(target_name),
                ctx,
            ));
        };

        if (self.predicate)(value, target_value) {
            Ok(())
        } else {
            let message = match ctx.field_name() {
                Some(field) => format!(
                    "{field}={value} {} {target_name}={target_value}",
                    self.message
                ),
                None => format!("{value} {} {target_name}={target_value}", self.message),
            };
            Err(ctx.failure("reference_failed", message))
        }
    }
}

fn qualify(error: ValidationError, ctx: &ValidationContext<'_>) -> ValidationError {
    match ctx.field_name() {
        Some(name) => error.with_field(name.to_owned()),
        None => error,
    }
}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("target", &self.target)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
