//! Validation context: field-name qualification and instance scope.
//!
//! Validators receive the same value through four surfaces (bare call,
//! field-level validate, attribute write, whole-object validation). The
//! [`ValidationContext`] carries what differs between them: the dotted
//! field path, when one is known, and the owning instance's lookup
//! capability, when one exists. Context is borrowed, constructed fresh per
//! validation call, and never cached.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::{Value, ValidationError};

// ============================================================================
// FIELD ID
// ============================================================================

/// Process-unique identity of a declared field.
///
/// Minted when a `Field` is constructed, before the field is bound to a
/// name. Direct cross-field references hold a `FieldId` and let the owning
/// schema map it back to a name at validation time, so a field can be
/// referenced regardless of declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(u64);

impl FieldId {
    /// Mints the next unique id.
    #[must_use]
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

// ============================================================================
// SCOPE
// ============================================================================

/// Lookup capability of an owning instance.
///
/// Cross-field references resolve through this trait at validation time.
/// An `Instance` implements it with schema-aware identity lookup; a plain
/// object [`Value`] implements it with key lookup only, which is what
/// nested-schema children validate against.
pub trait Scope {
    /// Current value of the named field, if the scope exposes one.
    fn value_of(&self, name: &str) -> Option<&Value>;

    /// Name bound to the given field identity, if the scope knows it.
    fn name_of(&self, _id: FieldId) -> Option<&str> {
        None
    }
}

impl Scope for Value {
    fn value_of(&self, name: &str) -> Option<&Value> {
        self.as_map()?.get(name)
    }
}

// ============================================================================
// VALIDATION CONTEXT
// ============================================================================

/// Per-call validation context.
///
/// # Examples
///
/// ```rust
/// use exodia::foundation::ValidationContext;
///
/// let bare = ValidationContext::bare();
/// assert_eq!(bare.field_name(), None);
///
/// let named = ValidationContext::named("age");
/// assert_eq!(named.field_name(), Some("age"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    field_name: Option<&'a str>,
    scope: Option<&'a dyn Scope>,
}

impl<'a> ValidationContext<'a> {
    /// Context for a bare, standalone validation: no field name, no scope.
    #[must_use]
    pub const fn bare() -> Self {
        Self {
            field_name: None,
            scope: None,
        }
    }

    /// Context qualified with a field path.
    #[must_use]
    pub const fn named(field_name: &'a str) -> Self {
        Self {
            field_name: Some(field_name),
            scope: None,
        }
    }

    /// Attaches the owning instance's lookup capability.
    #[must_use]
    pub fn with_scope(mut self, scope: &'a dyn Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// The dotted field path this validation is running under, if any.
    #[must_use]
    pub const fn field_name(&self) -> Option<&'a str> {
        self.field_name
    }

    /// The owning instance scope, if any.
    #[must_use]
    pub fn scope(&self) -> Option<&'a dyn Scope> {
        self.scope
    }

    /// Builds a failure carrying this context's field path.
    #[must_use]
    pub fn failure(
        &self,
        code: &'static str,
        message: impl Into<std::borrow::Cow<'static, str>>,
    ) -> ValidationError {
        let error = ValidationError::new(code, message);
        match self.field_name {
            Some(name) => error.with_field(name.to_owned()),
            None => error,
        }
    }
}

impl std::fmt::Debug for ValidationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationContext")
            .field("field_name", &self.field_name)
            .field("scope", &self.scope.map(|_| "<scope>"))
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
