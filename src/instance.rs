//! Instances: validated attribute storage over a shared schema.
//!
//! An [`Instance`] holds per-object attribute values; the schema it was
//! created from is shared, immutable, behind an `Arc`. Every attribute
//! write goes through the owning field's full evaluation before storage
//! is touched, so an instance never holds a value its schema rejects.

use std::sync::Arc;

use crate::foundation::{FieldId, Map, Scope, ValidationContext, ValidationError, ValidationResult, Value};
use crate::schema::Schema;

// ============================================================================
// INSTANCE
// ============================================================================

/// A validated object: shared schema plus per-instance attribute values.
///
/// # Examples
///
/// ```rust
/// use exodia::{attrs, Field, Instance, Schema};
///
/// let person = Schema::builder()
///     .field("first_name", Field::string().required().min(2))
///     .field("age", Field::integer().required().between(0, 150))
///     .build();
///
/// let nick = Instance::create(person, attrs! {
///     "first_name" => "Nick",
///     "age" => 30,
/// })?;
/// assert_eq!(nick.get("age").and_then(|v| v.as_i64()), Some(30));
/// # Ok::<(), exodia::foundation::ValidationError>(())
/// ```
#[derive(Debug)]
pub struct Instance {
    schema: Arc<Schema>,
    values: Map,
}

impl Instance {
    /// An empty instance with no attributes set.
    ///
    /// Required fields are only enforced on writes and during
    /// [`create`](Self::create); an empty instance is a staging area.
    pub fn new(schema: impl Into<Arc<Schema>>) -> Self {
        Self {
            schema: schema.into(),
            values: Map::new(),
        }
    }

    /// Creates and fully validates an instance from an attribute map.
    ///
    /// Attributes not declared on the schema are rejected. Declared
    /// fields are processed in declaration order: provided values pass
    /// presence, type and constraint-chain validation and are stored,
    /// unprovided fields are validated as absent (which is how required
    /// fields reject). Cross-field references are evaluated in a second
    /// pass, once every attribute is stored, so a reference may target a
    /// field declared after the referring one. After every field passes,
    /// the schema's post-validation hook runs over the stored values; its
    /// error message is surfaced unchanged under the `assertion` code.
    pub fn create(schema: impl Into<Arc<Schema>>, mut attrs: Map) -> ValidationResult<Self> {
        let schema = schema.into();

        if let Some(name) = attrs.keys().find(|name| schema.field(name).is_none()) {
            return Err(ValidationError::unknown_field(name));
        }

        let mut instance = Self {
            schema: Arc::clone(&schema),
            values: Map::new(),
        };

        for (name, field) in schema.fields() {
            match attrs.remove(name) {
                Some(value) => {
                    let ctx = ValidationContext::named(name).with_scope(&instance);
                    field.validate_local(&value, &ctx)?;
                    instance.values.insert(name.clone(), value);
                }
                None => {
                    field.validate_local(&Value::Null, &ValidationContext::named(name))?;
                }
            }
        }

        for (name, field) in schema.fields() {
            if let (Some(reference), Some(value)) = (field.reference(), instance.values.get(name))
            {
                let ctx = ValidationContext::named(name).with_scope(&instance);
                reference.evaluate(value, &ctx)?;
            }
        }

        if let Some(hook) = schema.hook() {
            hook(&instance.values).map_err(ValidationError::assertion)?;
        }

        Ok(instance)
    }

    /// Writes an attribute through validation.
    ///
    /// The value is validated under the field's full evaluation, with
    /// this instance as reference scope, before storage is touched; on
    /// failure the previously stored value (if any) is untouched.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> ValidationResult {
        let schema = Arc::clone(&self.schema);
        let Some(field) = schema.field(name) else {
            return Err(ValidationError::unknown_field(name));
        };

        let value = value.into();
        let ctx = ValidationContext::named(name).with_scope(&*self);
        field.validate_with(&value, &ctx)?;

        self.values.insert(name.to_owned(), value);
        Ok(())
    }

    /// Reads an attribute, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// All stored attribute values.
    #[must_use]
    pub fn values(&self) -> &Map {
        &self.values
    }

    /// The schema this instance was created from.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Scope for Instance {
    fn value_of(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    fn name_of(&self, id: FieldId) -> Option<&str> {
        self.schema.name_of(id)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::field::Field;

    fn person() -> Schema {
        Schema::builder()
            .field("first_name", Field::string().required().min(2))
            .field("age", Field::integer().required().between(0, 150))
            .build()
    }

    #[test]
    fn create_stores_validated_attributes() {
        let nick = Instance::create(person(), attrs! {
            "first_name" => "Nick",
            "age" => 30,
        })
        .unwrap();
        assert_eq!(nick.get("first_name"), Some(&Value::from("Nick")));
        assert_eq!(nick.get("age"), Some(&Value::Int(30)));
    }

    #[test]
    fn create_rejects_unknown_attributes() {
        let err = Instance::create(person(), attrs! {
            "first_name" => "Nick",
            "age" => 30,
            "nickname" => "N",
        })
        .unwrap_err();
        assert_eq!(err.code, "unknown_field");
        assert_eq!(err.field.as_deref(), Some("nickname"));
    }

    #[test]
    fn create_enforces_required_fields() {
        let err = Instance::create(person(), attrs! { "age" => 30 }).unwrap_err();
        assert_eq!(err.code, "required");
        assert_eq!(err.message, "first_name is required");
    }

    #[test]
    fn create_reports_fields_in_declaration_order() {
        // both fields fail; the first declared one is reported
        let err = Instance::create(person(), attrs! {
            "first_name" => "N",
            "age" => 200,
        })
        .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("first_name"));
    }

    #[test]
    fn set_rejects_without_clobbering() {
        let mut nick = Instance::create(person(), attrs! {
            "first_name" => "Nick",
            "age" => 30,
        })
        .unwrap();

        let err = nick.set("age", 200).unwrap_err();
        assert_eq!(err.code, "between");
        assert_eq!(nick.get("age"), Some(&Value::Int(30)));

        nick.set("age", 31).unwrap();
        assert_eq!(nick.get("age"), Some(&Value::Int(31)));
    }

    #[test]
    fn set_rejects_undeclared_names() {
        let mut nick = Instance::new(person());
        assert_eq!(
            nick.set("nickname", "N").unwrap_err().code,
            "unknown_field"
        );
    }

    #[test]
    fn hook_runs_after_all_fields_pass() {
        let schema = Schema::builder()
            .field("age", Field::integer().required())
            .field("younger_brother_age", Field::integer().required())
            .check(|attrs| {
                crate::ensure!(
                    attrs["younger_brother_age"]
                        .compare(&attrs["age"])
                        .is_some_and(std::cmp::Ordering::is_lt),
                    "younger_brother can't be older!"
                );
                Ok(())
            })
            .build();

        let err = Instance::create(schema, attrs! {
            "age" => 10,
            "younger_brother_age" => 30,
        })
        .map(|_| ())
        .unwrap_err();
        assert_eq!(err.code, "assertion");
        assert_eq!(err.message, "younger_brother can't be older!");
    }

    #[test]
    fn deferred_reference_points_forward() {
        // brother_age references age, declared after it
        let schema = Schema::builder()
            .field(
                "brother_age",
                Field::integer().required().refers(
                    "age",
                    |v, t| v.compare(t).is_some_and(std::cmp::Ordering::is_lt),
                    "must be less than",
                ),
            )
            .field("age", Field::integer().required())
            .build();
        let schema = Arc::new(schema);

        let mut instance = Instance::new(Arc::clone(&schema));
        instance.set("age", 30).unwrap();
        instance.set("brother_age", 10).unwrap();

        let err = instance.set("brother_age", 40).unwrap_err();
        assert_eq!(err.code, "reference_failed");
        assert_eq!(err.message, "brother_age=40 must be less than age=30");
    }

    #[test]
    fn create_evaluates_references_after_all_fields_are_stored() {
        // the referring field is declared and provided before its target;
        // construction must still resolve the reference
        let schema = Arc::new(
            Schema::builder()
                .field(
                    "brother_age",
                    Field::integer().required().refers(
                        "age",
                        |v, t| v.compare(t).is_some_and(std::cmp::Ordering::is_lt),
                        "must be less than",
                    ),
                )
                .field("age", Field::integer().required())
                .build(),
        );

        let ok = Instance::create(Arc::clone(&schema), attrs! {
            "brother_age" => 10,
            "age" => 30,
        });
        assert!(ok.is_ok());

        let err = Instance::create(Arc::clone(&schema), attrs! {
            "brother_age" => 40,
            "age" => 30,
        })
        .unwrap_err();
        assert_eq!(err.code, "reference_failed");
        assert_eq!(err.message, "brother_age=40 must be less than age=30");
    }

    #[test]
    fn unprovided_optional_field_skips_its_reference() {
        let schema = Schema::builder()
            .field(
                "brother_age",
                Field::integer().optional().refers("age", |_, _| false, "never"),
            )
            .field("age", Field::integer().required())
            .build();

        let ok = Instance::create(schema, attrs! { "age" => 30 });
        assert!(ok.is_ok());
    }

    #[test]
    fn direct_reference_resolves_through_schema_identity() {
        let age = Field::integer().required();
        let brother = Field::integer().required().refers(
            &age,
            |v, t| v.compare(t).is_some_and(std::cmp::Ordering::is_lt),
            "must be less than",
        );
        let schema = Arc::new(
            Schema::builder()
                .field("age", age)
                .field("brother_age", brother)
                .build(),
        );

        let ok = Instance::create(Arc::clone(&schema), attrs! { "age" => 30, "brother_age" => 10 });
        assert!(ok.is_ok());

        let err = Instance::create(Arc::clone(&schema), attrs! { "age" => 30, "brother_age" => 40 })
            .unwrap_err();
        assert_eq!(err.code, "reference_failed");
    }

    #[test]
    fn reference_against_unset_target_is_unknown() {
        let schema = Schema::builder()
            .field(
                "brother_age",
                Field::integer().refers("age", |_, _| true, "whatever"),
            )
            .field("age", Field::integer())
            .build();

        let mut instance = Instance::new(schema);
        let err = instance.set("brother_age", 1).unwrap_err();
        assert_eq!(err.code, "unknown_reference_target");
    }

    #[test]
    fn schema_is_shared_not_cloned() {
        let schema = Arc::new(person());
        let a = Instance::new(Arc::clone(&schema));
        let b = Instance::new(Arc::clone(&schema));
        assert!(std::ptr::eq(a.schema(), b.schema()));
    }
}
