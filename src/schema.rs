//! Schema: the immutable, declaration-ordered field catalogue.
//!
//! A [`Schema`] is built once and shared by every instance created from
//! it. It owns the field declarations, preserves their declaration order
//! (whole-object validation walks fields in this order), and optionally a
//! post-validation hook that checks cross-field consistency after every
//! field has individually passed.

use std::fmt;

use crate::field::Field;
use crate::foundation::{FieldId, Map};

/// Post-validation hook signature. Receives the validated attribute map;
/// an `Err` message is surfaced as an `assertion` failure, unchanged.
pub type Hook = dyn Fn(&Map) -> Result<(), String> + Send + Sync;

// ============================================================================
// SCHEMA
// ============================================================================

/// An immutable field catalogue with an optional post-validation hook.
///
/// # Examples
///
/// ```rust
/// use exodia::{Field, Schema};
///
/// let person = Schema::builder()
///     .field("first_name", Field::string().required().min(2))
///     .field("age", Field::integer().required().between(0, 150))
///     .build();
/// assert!(person.field("age").is_some());
/// ```
pub struct Schema {
    fields: Vec<(String, Field)>,
    hook: Option<Box<Hook>>,
}

impl Schema {
    /// Starts building a schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder {
            fields: Vec::new(),
            hook: None,
        }
    }

    /// Declared fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[(String, Field)] {
        &self.fields
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
    }

    /// Maps a field identity back to its declared name.
    #[must_use]
    pub fn name_of(&self, id: FieldId) -> Option<&str> {
        self.fields
            .iter()
            .find(|(_, f)| f.id() == id)
            .map(|(n, _)| n.as_str())
    }

    /// The post-validation hook, if one was declared.
    #[must_use]
    pub fn hook(&self) -> Option<&Hook> {
        self.hook.as_deref()
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field(
                "fields",
                &self.fields.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .field("hook", &self.hook.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builds a [`Schema`].
#[must_use = "builder methods must be chained or built"]
pub struct SchemaBuilder {
    fields: Vec<(String, Field)>,
    hook: Option<Box<Hook>>,
}

impl SchemaBuilder {
    /// Declares a field.
    ///
    /// # Panics
    ///
    /// Panics if the name is already declared; redeclaring a field is a
    /// schema-description bug, caught at declaration time.
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        let name = name.into();
        assert!(
            !self.fields.iter().any(|(n, _)| *n == name),
            "field {name} is declared twice"
        );
        self.fields.push((name, field));
        self
    }

    /// Declares the post-validation hook, run after all fields pass
    /// during whole-object construction.
    pub fn check(mut self, hook: impl Fn(&Map) -> Result<(), String> + Send + Sync + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Finalizes the schema.
    #[must_use]
    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
            hook: self.hook,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_preserved() {
        let schema = Schema::builder()
            .field("b", Field::any())
            .field("a", Field::any())
            .field("c", Field::any())
            .build();
        let names: Vec<_> = schema.fields().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn lookup_by_name_and_identity() {
        let age = Field::integer();
        let id = age.id();
        let schema = Schema::builder().field("age", age).build();

        assert!(schema.field("age").is_some());
        assert!(schema.field("missing").is_none());
        assert_eq!(schema.name_of(id), Some("age"));
        assert_eq!(schema.name_of(crate::foundation::FieldId::next()), None);
    }

    #[test]
    #[should_panic(expected = "declared twice")]
    fn duplicate_field_name_panics() {
        let _ = Schema::builder()
            .field("age", Field::integer())
            .field("age", Field::integer())
            .build();
    }

    #[test]
    fn hook_is_carried() {
        let schema = Schema::builder()
            .check(|_| Err("nope".to_owned()))
            .build();
        let hook = schema.hook().unwrap();
        assert_eq!(hook(&Map::new()), Err("nope".to_owned()));
    }
}
