//! Length validators for strings and lists.
//!
//! String length is measured in Unicode scalar values, list length in
//! elements. A value with no length concept fails these validators
//! outright.

crate::validator! {
    /// Validates an exact length.
    pub Length { length: usize };
    code = "length";
    rule(self, value, ctx) { value.length().is_some_and(|l| l == self.length) }
    field_message(self, value, field) {
        format!("{field} must be of length {}", self.length)
    }
    message(self, value) { format!("length must be {}", self.length) }
    fn length(length: usize);
}

crate::validator! {
    /// Validates a minimum length (inclusive).
    pub MinLength { length: usize };
    code = "min_length";
    rule(self, value, ctx) { value.length().is_some_and(|l| l >= self.length) }
    field_message(self, value, field) {
        format!("{field}={value} must have length of at least {}", self.length)
    }
    message(self, value) {
        format!("{value} must have length of at least {}", self.length)
    }
    fn min_length(length: usize);
}

crate::validator! {
    /// Validates a maximum length (inclusive).
    pub MaxLength { length: usize };
    code = "max_length";
    rule(self, value, ctx) { value.length().is_some_and(|l| l <= self.length) }
    field_message(self, value, field) {
        format!("{field}={value} must have length of at most {}", self.length)
    }
    message(self, value) {
        format!("{value} must have length of at most {}", self.length)
    }
    fn max_length(length: usize);
}

crate::validator! {
    /// Validates that a string or list is not empty.
    pub NotEmpty;
    code = "not_empty";
    rule(self, value, ctx) { value.length().is_some_and(|l| l > 0) }
    field_message(self, value, field) { format!("{field} must not be empty") }
    message(self, value) { "value must not be empty".to_owned() }
    fn not_empty();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidationContext, Value};

    #[test]
    fn exact_length() {
        let v = length(5);
        assert!(v.check(&Value::from("hello")));
        assert!(!v.check(&Value::from("hi")));
        assert!(!v.check(&Value::from("toolong")));
    }

    #[test]
    fn min_length_bounds() {
        let v = min_length(3);
        assert!(v.check(&Value::from("abc")));
        assert!(v.check(&Value::from("abcd")));
        assert!(!v.check(&Value::from("ab")));
    }

    #[test]
    fn max_length_bounds() {
        let v = max_length(3);
        assert!(v.check(&Value::from("abc")));
        assert!(!v.check(&Value::from("abcd")));
    }

    #[test]
    fn length_counts_unicode_chars() {
        assert!(length(5).check(&Value::from("h\u{e9}llo")));
    }

    #[test]
    fn lists_have_length_too() {
        assert!(min_length(2).check(&Value::from(vec![1, 2, 3])));
        assert!(!min_length(2).check(&Value::from(vec![1])));
    }

    #[test]
    fn lengthless_values_fail() {
        assert!(!min_length(0).check(&Value::from(2)));
        assert!(!not_empty().check(&Value::Bool(true)));
    }

    #[test]
    fn not_empty_rule() {
        let v = not_empty();
        assert!(v.check(&Value::from(" ")));
        assert!(!v.check(&Value::from("")));
        assert!(!v.check(&Value::from(Vec::<i64>::new())));
    }

    #[test]
    fn field_qualified_message() {
        let err = min_length(250)
            .validate(
                &Value::from("SHORT"),
                &ValidationContext::named("first_name"),
            )
            .unwrap_err();
        assert_eq!(
            err.message,
            "first_name=SHORT must have length of at least 250"
        );
    }
}
