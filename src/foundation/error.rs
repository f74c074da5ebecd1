//! The single error type crossing the engine boundary.
//!
//! Every failure the engine surfaces is a [`ValidationError`]: a stable
//! machine-readable code, a human-readable message, the offending field's
//! dotted path when known, and ordered key/value params for tooling.
//!
//! String storage uses `Cow<'static, str>` so the common case of static
//! codes and messages allocates nothing.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::foundation::Value;

/// Result alias used throughout the engine.
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```rust
/// use exodia::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "must have length of at least 3")
///     .with_field("username")
///     .with_param("min", "3");
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.param("min"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error code for programmatic handling: `"required"`, `"type_mismatch"`,
    /// `"between"`, ...
    pub code: Cow<'static, str>,

    /// Human-readable message. Field-qualified when the failure occurred in
    /// a named-field context, value-qualified otherwise.
    pub message: Cow<'static, str>,

    /// Dotted path of the offending field, when known
    /// (`"age"`, `"obj.name"`, `"nested_obj.nested.random"`).
    pub field: Option<Cow<'static, str>>,

    /// Ordered key/value params, typically 0-3 entries.
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>,
}

impl ValidationError {
    /// Creates a new error from a code and a message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field path.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a diagnostic parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Exports the error as a JSON value for tooling.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

impl serde::Serialize for ValidationError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================
//
// Centralized constructors for the failure kinds that are produced outside
// a single validator: presence, typing, references, orchestration. Keeping
// them here keeps the observable message shapes in one place.

impl ValidationError {
    /// Missing required value. Field-qualified when a field name is known.
    #[must_use]
    pub fn required(field: Option<&str>) -> Self {
        match field {
            Some(name) => Self::new("required", format!("{name} is required"))
                .with_field(name.to_owned()),
            None => Self::new("required", "got null, but a value is required"),
        }
    }

    /// Runtime type does not match the declared type set.
    ///
    /// The message is field-qualified (`name=value is of type ...`) when a
    /// field name is known and value-qualified (`value is of type ...`)
    /// otherwise; both name the actual and the expected types.
    #[must_use]
    pub fn type_mismatch(field: Option<&str>, value: &Value, expected: &str) -> Self {
        let actual = value.kind().name();
        let error = match field {
            Some(name) => Self::new(
                "type_mismatch",
                format!("{name}={value} is of type {actual}, expected types {expected}"),
            )
            .with_field(name.to_owned()),
            None => Self::new(
                "type_mismatch",
                format!("{value} is of type {actual}, expected types {expected}"),
            ),
        };
        error
            .with_param("actual", actual)
            .with_param("expected", expected.to_owned())
    }

    /// A reference was evaluated without an owning instance in scope.
    #[must_use]
    pub fn unresolved_reference() -> Self {
        Self::new(
            "unresolved_reference",
            "cannot resolve reference without an owning instance",
        )
    }

    /// A reference names a target the owning instance does not expose.
    #[must_use]
    pub fn unknown_reference_target(target: &str) -> Self {
        Self::new(
            "unknown_reference_target",
            format!("reference target {target} does not exist"),
        )
        .with_param("target", target.to_owned())
    }

    /// An attribute name that is not declared on the schema.
    #[must_use]
    pub fn unknown_field(name: &str) -> Self {
        Self::new("unknown_field", format!("{name} is not a declared field"))
            .with_field(name.to_owned())
    }

    /// A post-validation hook assertion failed; the message is carried
    /// through unchanged.
    #[must_use]
    pub fn assertion(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("assertion", message)
    }
}

// ============================================================================
// TESTS
// ============================================================================
