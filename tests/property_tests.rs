//! Property-based tests for the validation engine.

use exodia::prelude::*;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn min_length_idempotent(s in ".*") {
        let v = min_length(3);
        let value = Value::from(s);
        prop_assert_eq!(v.check(&value), v.check(&value));
    }

    #[test]
    fn between_idempotent(n in any::<i64>()) {
        let v = between(0, 100);
        let value = Value::from(n);
        prop_assert_eq!(v.check(&value), v.check(&value));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = min_length(3);
        let b = max_length(10);
        let value = Value::from(s);

        let combined_ok = a.clone().and(b.clone()).check(&value);
        prop_assert_eq!(combined_ok, a.check(&value) && b.check(&value));
    }

    #[test]
    fn stack_agrees_with_and(s in ".{0,30}") {
        let value = Value::from(s);
        let stacked = Stack::new().with(min_length(3)).with(max_length(10));
        let chained = min_length(3).and(max_length(10));
        prop_assert_eq!(stacked.check(&value), chained.check(&value));
    }

    #[test]
    fn not_inverts(n in any::<i64>()) {
        let v = greater_than(0);
        let value = Value::from(n);
        prop_assert_eq!(v.clone().not().check(&value), !v.check(&value));
    }
}

// ============================================================================
// FIELD INVARIANTS
// ============================================================================

proptest! {
    #[test]
    fn required_integer_field_total_over_values(n in any::<i64>()) {
        // a well-typed value within bounds always passes, everything else
        // fails with a stable code
        let field = Field::integer().required().between(0, 100);
        let value = Value::from(n);
        match field.validate(&value) {
            Ok(()) => prop_assert!((0..=100).contains(&n)),
            Err(e) => prop_assert_eq!(e.code, "between"),
        }
    }

    #[test]
    fn stored_attribute_equals_written_value(n in 0i64..=150) {
        let schema = Schema::builder()
            .field("age", Field::integer().required().between(0, 150))
            .build();
        let mut instance = Instance::new(schema);
        instance.set("age", n).unwrap();
        prop_assert_eq!(instance.get("age"), Some(&Value::Int(n)));
    }
}
