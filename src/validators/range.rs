//! Ordering and arithmetic validators.
//!
//! Comparisons delegate to [`Value::compare`], so integer bounds apply to
//! float values and vice versa; incomparable kinds fail the validator.

use std::cmp::Ordering;

use crate::foundation::Value;

crate::validator! {
    /// Validates a minimum value (inclusive).
    pub MinValue { min: Value };
    code = "min_value";
    rule(self, value, ctx) {
        value.compare(&self.min).is_some_and(Ordering::is_ge)
    }
    field_message(self, value, field) {
        format!("{field}={value} must be at least {}", self.min)
    }
    message(self, value) { format!("{value} must be at least {}", self.min) }
    new(min: impl Into<Value>) { Self { min: min.into() } }
    fn min_value(min: impl Into<Value>);
}

crate::validator! {
    /// Validates a maximum value (inclusive).
    pub MaxValue { max: Value };
    code = "max_value";
    rule(self, value, ctx) {
        value.compare(&self.max).is_some_and(Ordering::is_le)
    }
    field_message(self, value, field) {
        format!("{field}={value} must be at most {}", self.max)
    }
    message(self, value) { format!("{value} must be at most {}", self.max) }
    new(max: impl Into<Value>) { Self { max: max.into() } }
    fn max_value(max: impl Into<Value>);
}

crate::validator! {
    /// Validates an inclusive range.
    pub Between { min: Value, max: Value };
    code = "between";
    rule(self, value, ctx) {
        value.compare(&self.min).is_some_and(Ordering::is_ge)
            && value.compare(&self.max).is_some_and(Ordering::is_le)
    }
    field_message(self, value, field) {
        format!("{field} must be between ({}, {})", self.min, self.max)
    }
    message(self, value) {
        format!("{value} is not between ({}, {})", self.min, self.max)
    }
    new(min: impl Into<Value>, max: impl Into<Value>) {
        Self { min: min.into(), max: max.into() }
    }
    fn between(min: impl Into<Value>, max: impl Into<Value>);
}

crate::validator! {
    /// Validates a strict upper bound.
    pub LessThan { bound: Value };
    code = "less_than";
    rule(self, value, ctx) {
        value.compare(&self.bound).is_some_and(Ordering::is_lt)
    }
    field_message(self, value, field) {
        format!("{field}={value} must be less than {}", self.bound)
    }
    message(self, value) { format!("{value} must be less than {}", self.bound) }
    new(bound: impl Into<Value>) { Self { bound: bound.into() } }
    fn less_than(bound: impl Into<Value>);
}

crate::validator! {
    /// Validates a strict lower bound.
    pub GreaterThan { bound: Value };
    code = "greater_than";
    rule(self, value, ctx) {
        value.compare(&self.bound).is_some_and(Ordering::is_gt)
    }
    field_message(self, value, field) {
        format!("{field}={value} must be greater than {}", self.bound)
    }
    message(self, value) { format!("{value} must be greater than {}", self.bound) }
    new(bound: impl Into<Value>) { Self { bound: bound.into() } }
    fn greater_than(bound: impl Into<Value>);
}

crate::validator! {
    /// Validates equality with a fixed value.
    pub Equal { expected: Value };
    code = "equal";
    rule(self, value, ctx) { *value == self.expected }
    field_message(self, value, field) {
        format!("{field}={value} must be equal to {}", self.expected)
    }
    message(self, value) { format!("{value} must be equal to {}", self.expected) }
    new(expected: impl Into<Value>) { Self { expected: expected.into() } }
    fn equal(expected: impl Into<Value>);
}

crate::validator! {
    /// Validates integer divisibility.
    pub MultipleOf { n: i64 };
    code = "multiple_of";
    rule(self, value, ctx) {
        // checked_rem returns None only on overflow (i64::MIN % -1),
        // where the true remainder is zero
        value
            .as_i64()
            .is_some_and(|x| x.checked_rem(self.n).is_none_or(|r| r == 0))
    }
    field_message(self, value, field) {
        format!("{field}={value} is not a multiple of {}", self.n)
    }
    message(self, value) { format!("{value} is not a multiple of {}", self.n) }
    new(n: i64) {
        assert!(n != 0, "MultipleOf.n must be non-zero");
        Self { n }
    }
    fn multiple_of(n: i64);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidationContext};

    #[test]
    fn between_is_inclusive() {
        let v = between(1, 10);
        assert!(v.check(&Value::from(1)));
        assert!(v.check(&Value::from(10)));
        assert!(!v.check(&Value::from(0)));
        assert!(!v.check(&Value::from(11)));
    }

    #[test]
    fn between_crosses_numeric_kinds() {
        let v = between(1, 10);
        assert!(v.check(&Value::from(5.5)));
        assert!(!v.check(&Value::from(10.5)));
    }

    #[test]
    fn incomparable_kinds_fail() {
        assert!(!between(1, 10).check(&Value::from("5")));
        assert!(!less_than(10).check(&Value::Bool(true)));
    }

    #[test]
    fn strict_bounds() {
        assert!(less_than(5).check(&Value::from(4)));
        assert!(!less_than(5).check(&Value::from(5)));
        assert!(greater_than(5).check(&Value::from(6)));
        assert!(!greater_than(5).check(&Value::from(5)));
    }

    #[test]
    fn min_max_are_inclusive() {
        assert!(min_value(5).check(&Value::from(5)));
        assert!(!min_value(5).check(&Value::from(4)));
        assert!(max_value(5).check(&Value::from(5)));
        assert!(!max_value(5).check(&Value::from(6)));
    }

    #[test]
    fn equal_compares_values() {
        let v = equal("BIG");
        assert!(v.check(&Value::from("BIG")));
        assert!(!v.check(&Value::from("SMALL")));
    }

    #[test]
    fn multiple_of_rule() {
        let v = multiple_of(3);
        assert!(v.check(&Value::from(9)));
        assert!(!v.check(&Value::from(10)));
        assert!(!v.check(&Value::from(1.5)));
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn multiple_of_zero_is_a_declaration_error() {
        let _ = multiple_of(0);
    }

    #[test]
    fn multiple_of_extreme_operands_do_not_overflow() {
        // i64::MIN rem -1 overflows the naive % operator
        assert!(multiple_of(-1).check(&Value::from(i64::MIN)));
        assert!(multiple_of(-3).check(&Value::from(9)));
        assert!(!multiple_of(-3).check(&Value::from(10)));
        assert!(multiple_of(1).check(&Value::from(i64::MIN)));
    }

    #[test]
    fn between_messages() {
        let v = between(1, 10);
        let bare = v
            .validate(&Value::from(42), &ValidationContext::bare())
            .unwrap_err();
        assert_eq!(bare.message, "42 is not between (1, 10)");

        let named = v
            .validate(&Value::from(42), &ValidationContext::named("age"))
            .unwrap_err();
        assert_eq!(named.message, "age must be between (1, 10)");
    }
}
