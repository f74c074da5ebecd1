//! The fluent field builder.
//!
//! A [`Field`] declares everything about one attribute: its runtime type,
//! whether absence is allowed, an ordered chain of constraint validators,
//! and an optional cross-field reference. Declaration misuse (conflicting
//! presence, duplicate constraint kinds) panics at declaration time, the
//! moment the schema is being described, never during validation.
//!
//! # Examples
//!
//! ```rust
//! use exodia::Field;
//! use exodia::foundation::Value;
//!
//! let first_name = Field::string().required().min(2).max(30);
//! assert!(first_name.validate(&Value::from("Nick")).is_ok());
//! assert!(first_name.validate(&Value::from("N")).is_err());
//! ```

use chrono::NaiveDate;
use regex::Regex;

use crate::combinators::Stack;
use crate::foundation::{
    FieldId, Validate, ValidationContext, ValidationError, Value, ValueKind,
};
use crate::reference::{RefTarget, Reference};
use crate::schema::Schema;
use crate::validators::{
    Equal, GreaterThan, IsDate, LessThan, Matches, MaxLength, MaxValue, MinLength, MinValue,
    MultipleOf, NotEmpty, OfType, OneOf, Predicate,
};

// ============================================================================
// TYPE RULE
// ============================================================================

/// How a field constrains the runtime type of its value.
#[derive(Debug)]
enum TypeRule {
    /// No type constraint.
    Any,

    /// The value's kind must be in a declared set.
    Kinds(OfType),

    /// The value must be an object validated against a nested schema.
    Nested(Box<Schema>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

// ============================================================================
// FIELD
// ============================================================================

/// A declared attribute: type rule, presence, constraint chain, reference.
#[derive(Debug)]
pub struct Field {
    id: FieldId,
    type_rule: TypeRule,
    presence: Option<Presence>,
    chain: Stack,
    reference: Option<Reference>,
}

impl Field {
    fn with_rule(type_rule: TypeRule) -> Self {
        Self {
            id: FieldId::next(),
            type_rule,
            presence: None,
            chain: Stack::new(),
            reference: None,
        }
    }

    /// A field holding a string.
    #[must_use]
    pub fn string() -> Self {
        Self::with_rule(TypeRule::Kinds(OfType::new(ValueKind::String)))
    }

    /// A field holding an integer.
    #[must_use]
    pub fn integer() -> Self {
        Self::with_rule(TypeRule::Kinds(OfType::new(ValueKind::Integer)))
    }

    /// A field holding a float. Integers are not admitted; declare
    /// [`number`](Self::number) to accept both.
    #[must_use]
    pub fn float() -> Self {
        Self::with_rule(TypeRule::Kinds(OfType::new(ValueKind::Float)))
    }

    /// A field holding an integer or a float.
    #[must_use]
    pub fn number() -> Self {
        Self::with_rule(TypeRule::Kinds(OfType::any_of([
            ValueKind::Integer,
            ValueKind::Float,
        ])))
    }

    /// A field holding a boolean.
    #[must_use]
    pub fn boolean() -> Self {
        Self::with_rule(TypeRule::Kinds(OfType::new(ValueKind::Boolean)))
    }

    /// A field holding a date, as a native date or an ISO-8601 string.
    #[must_use]
    pub fn date() -> Self {
        let mut field = Self::with_rule(TypeRule::Kinds(OfType::any_of([
            ValueKind::Date,
            ValueKind::String,
        ])));
        field.push(IsDate);
        field
    }

    /// A field holding a list.
    #[must_use]
    pub fn list() -> Self {
        Self::with_rule(TypeRule::Kinds(OfType::new(ValueKind::List)))
    }

    /// A field accepting any runtime type.
    #[must_use]
    pub fn any() -> Self {
        Self::with_rule(TypeRule::Any)
    }

    /// A field holding an object validated against a nested schema.
    #[must_use]
    pub fn object(schema: Schema) -> Self {
        Self::with_rule(TypeRule::Nested(Box::new(schema)))
    }

    /// This field's process-unique identity, used for direct references.
    #[must_use]
    pub fn id(&self) -> FieldId {
        self.id
    }

    // ── Presence ─────────────────────────────────────────────────────────

    /// Rejects absence.
    ///
    /// # Panics
    ///
    /// Panics if presence was already declared.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.declare_presence(Presence::Required);
        self
    }

    /// Accepts absence explicitly. Absent optional fields skip the
    /// constraint chain entirely.
    ///
    /// # Panics
    ///
    /// Panics if presence was already declared.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.declare_presence(Presence::Optional);
        self
    }

    fn declare_presence(&mut self, presence: Presence) {
        match self.presence {
            None => self.presence = Some(presence),
            Some(prior) if prior == presence => {
                panic!("presence is declared twice")
            }
            Some(_) => panic!("a field cannot be declared both required and optional"),
        }
    }

    // ── Constraints ──────────────────────────────────────────────────────

    /// Minimum constraint: length for string and list fields, value
    /// otherwise.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, n: i64) -> Self {
        if self.is_sized() {
            self.push(MinLength::new(declared_length(n)));
        } else {
            self.push(MinValue::new(n));
        }
        self
    }

    /// Maximum constraint: length for string and list fields, value
    /// otherwise.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, n: i64) -> Self {
        if self.is_sized() {
            self.push(MaxLength::new(declared_length(n)));
        } else {
            self.push(MaxValue::new(n));
        }
        self
    }

    /// Inclusive range constraint on the value.
    #[must_use = "builder methods must be chained or built"]
    pub fn between(mut self, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        self.push(crate::validators::Between::new(min, max));
        self
    }

    /// Exact length constraint.
    #[must_use = "builder methods must be chained or built"]
    pub fn length(mut self, n: usize) -> Self {
        self.push(crate::validators::Length::new(n));
        self
    }

    /// Rejects empty strings and lists.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_empty(mut self) -> Self {
        self.push(NotEmpty);
        self
    }

    /// Membership in a fixed option set.
    #[must_use = "builder methods must be chained or built"]
    pub fn one_of(mut self, options: impl IntoIterator<Item: Into<Value>>) -> Self {
        self.push(OneOf::new(options));
        self
    }

    /// Equality with a fixed value.
    #[must_use = "builder methods must be chained or built"]
    pub fn equals(mut self, expected: impl Into<Value>) -> Self {
        self.push(Equal::new(expected));
        self
    }

    /// Strict upper bound on the value.
    #[must_use = "builder methods must be chained or built"]
    pub fn less_than(mut self, bound: impl Into<Value>) -> Self {
        self.push(LessThan::new(bound));
        self
    }

    /// Strict lower bound on the value.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than(mut self, bound: impl Into<Value>) -> Self {
        self.push(GreaterThan::new(bound));
        self
    }

    /// Integer divisibility.
    #[must_use = "builder methods must be chained or built"]
    pub fn multiple_of(mut self, n: i64) -> Self {
        self.push(MultipleOf::new(n));
        self
    }

    /// Date strictly before a pivot.
    #[must_use = "builder methods must be chained or built"]
    pub fn before(mut self, pivot: NaiveDate) -> Self {
        self.push(crate::validators::Before::new(pivot));
        self
    }

    /// Date strictly after a pivot.
    #[must_use = "builder methods must be chained or built"]
    pub fn after(mut self, pivot: NaiveDate) -> Self {
        self.push(crate::validators::After::new(pivot));
        self
    }

    /// String matches a regular expression.
    #[must_use = "builder methods must be chained or built"]
    pub fn matches(mut self, pattern: Regex) -> Self {
        self.push(Matches::new(pattern));
        self
    }

    /// One-off predicate with a declaration-supplied message.
    #[must_use = "builder methods must be chained or built"]
    pub fn function(
        mut self,
        rule: impl Fn(&Value) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.push(Predicate::new(rule, message));
        self
    }

    /// Comparison against another field of the same instance.
    ///
    /// The target is another field's builder (direct, order-independent by
    /// identity) or a name (deferred, resolved at validation time, so it
    /// may point forward to a field declared later).
    #[must_use = "builder methods must be chained or built"]
    pub fn refers(
        mut self,
        target: impl Into<RefTarget>,
        predicate: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.reference = Some(Reference::new(target, predicate, message));
        self
    }

    /// Appends an arbitrary validator to the chain.
    ///
    /// # Panics
    ///
    /// Panics if the chain already holds a validator of the same type.
    pub fn push(&mut self, validator: impl Validate + 'static) {
        assert!(
            !self.chain.contains(validator.name()),
            "can't have multiple validators of type {}",
            validator.name()
        );
        self.chain.push(validator);
    }

    fn is_sized(&self) -> bool {
        match &self.type_rule {
            TypeRule::Kinds(of_type) => of_type
                .kinds()
                .iter()
                .any(|k| matches!(k, ValueKind::String | ValueKind::List)),
            _ => false,
        }
    }

    // ── Evaluation ───────────────────────────────────────────────────────

    /// Validates a value standalone, with no field name and no instance
    /// scope.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.validate_with(value, &ValidationContext::bare())
    }

    /// Validates a value under the given context.
    ///
    /// Evaluation order: presence, type rule, constraint chain, reference.
    /// An absent value on a non-required field short-circuits to success
    /// without touching the chain.
    pub fn validate_with(
        &self,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), ValidationError> {
        self.validate_local(value, ctx)?;
        if !value.is_null() {
            if let Some(reference) = &self.reference {
                reference.evaluate(value, ctx)?;
            }
        }
        Ok(())
    }

    /// Validates presence, type rule and the constraint chain, leaving any
    /// cross-field reference unevaluated.
    ///
    /// Whole-object construction uses this to admit every attribute before
    /// references run, so a reference may target a field declared (and
    /// provided) after the referring one.
    pub fn validate_local(
        &self,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), ValidationError> {
        if value.is_null() {
            return if self.presence == Some(Presence::Required) {
                Err(ValidationError::required(ctx.field_name()))
            } else {
                Ok(())
            };
        }

        match &self.type_rule {
            TypeRule::Any => {}
            TypeRule::Kinds(of_type) => of_type.validate(value, ctx)?,
            TypeRule::Nested(schema) => self.validate_nested(schema, value, ctx)?,
        }

        self.chain.validate(value, ctx)
    }

    /// The declared cross-field reference, if any.
    #[must_use]
    pub fn reference(&self) -> Option<&Reference> {
        self.reference.as_ref()
    }

    /// Recurses into a nested schema.
    ///
    /// Children validate under dotted paths, with the object itself as
    /// scope for their references. Missing children validate as absent;
    /// keys the schema does not declare are ignored.
    fn validate_nested(
        &self,
        schema: &Schema,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), ValidationError> {
        let Some(map) = value.as_map() else {
            return Err(ValidationError::type_mismatch(
                ctx.field_name(),
                value,
                "Object",
            ));
        };

        for (name, field) in schema.fields() {
            let path = match ctx.field_name() {
                Some(parent) => format!("{parent}.{name}"),
                None => name.clone(),
            };
            let child_value = map.get(name).unwrap_or(&Value::Null);
            let child_ctx = ValidationContext::named(&path).with_scope(value);
            field.validate_with(child_value, &child_ctx)?;
        }
        Ok(())
    }
}

impl Validate for Field {
    fn validate(&self, value: &Value, ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
        self.validate_with(value, ctx)
    }

    fn name(&self) -> &'static str {
        "Field"
    }
}

fn declared_length(n: i64) -> usize {
    usize::try_from(n).unwrap_or_else(|_| panic!("length bound must be non-negative, got {n}"))
}

// ============================================================================
// TESTS
// ============================================================================
