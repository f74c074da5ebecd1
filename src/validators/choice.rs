//! Membership validators.

use crate::foundation::Value;

crate::validator! {
    /// Validates that a value is a member of a fixed option set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exodia::foundation::{Validate, Value};
    /// use exodia::validators::one_of;
    ///
    /// let v = one_of(["BIG", "SMALL"]);
    /// assert!(v.check(&Value::from("BIG")));
    /// assert!(!v.check(&Value::from("MEDIUM")));
    /// ```
    pub OneOf { options: Vec<Value> };
    code = "one_of";
    rule(self, value, ctx) { self.options.contains(value) }
    field_message(self, value, field) {
        format!(
            "{value} is not a valid choice for {field}, choices are {}",
            render_options(&self.options)
        )
    }
    message(self, value) {
        format!(
            "{value} is not a valid choice, choices are {}",
            render_options(&self.options)
        )
    }
    new(options: impl IntoIterator<Item: Into<Value>>) {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
    fn one_of(options: impl IntoIterator<Item: Into<Value>>);
}

fn render_options(options: &[Value]) -> String {
    let joined = options
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidationContext};

    #[test]
    fn membership() {
        let v = one_of([1, 2, 3]);
        assert!(v.check(&Value::from(2)));
        assert!(!v.check(&Value::from(4)));
    }

    #[test]
    fn membership_is_value_equality() {
        // an integer option does not admit its string rendering
        let v = one_of([1, 2]);
        assert!(!v.check(&Value::from("1")));
    }

    #[test]
    fn mixed_kind_options() {
        let v = OneOf::new([Value::from("x"), Value::from(1)]);
        assert!(v.check(&Value::from("x")));
        assert!(v.check(&Value::from(1)));
    }

    #[test]
    fn messages_list_the_choices() {
        let v = one_of(["BIG", "SMALL"]);

        let bare = v
            .validate(&Value::from("MEDIUM"), &ValidationContext::bare())
            .unwrap_err();
        assert_eq!(
            bare.message,
            "MEDIUM is not a valid choice, choices are [BIG, SMALL]"
        );

        let named = v
            .validate(&Value::from("MEDIUM"), &ValidationContext::named("size"))
            .unwrap_err();
        assert_eq!(
            named.message,
            "MEDIUM is not a valid choice for size, choices are [BIG, SMALL]"
        );
    }
}
