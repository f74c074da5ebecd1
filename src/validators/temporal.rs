//! Date validators.
//!
//! These read the value through [`Value::as_date`], so they accept both
//! native dates and ISO-8601 date strings. A value with no date reading
//! fails the validator.

use chrono::NaiveDate;

crate::validator! {
    /// Validates that a date falls strictly before a pivot date.
    pub Before { pivot: NaiveDate };
    code = "before";
    rule(self, value, ctx) { value.as_date().is_some_and(|d| d < self.pivot) }
    field_message(self, value, field) {
        format!("{field}={value} must be before {}", self.pivot)
    }
    message(self, value) { format!("{value} must be before {}", self.pivot) }
    fn before(pivot: NaiveDate);
}

crate::validator! {
    /// Validates that a date falls strictly after a pivot date.
    pub After { pivot: NaiveDate };
    code = "after";
    rule(self, value, ctx) { value.as_date().is_some_and(|d| d > self.pivot) }
    field_message(self, value, field) {
        format!("{field}={value} must be after {}", self.pivot)
    }
    message(self, value) { format!("{value} must be after {}", self.pivot) }
    fn after(pivot: NaiveDate);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, Value};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn before_is_strict() {
        let v = before(date(2020, 1, 1));
        assert!(v.check(&Value::from(date(2019, 12, 31))));
        assert!(!v.check(&Value::from(date(2020, 1, 1))));
        assert!(!v.check(&Value::from(date(2020, 1, 2))));
    }

    #[test]
    fn after_is_strict() {
        let v = after(date(2020, 1, 1));
        assert!(v.check(&Value::from(date(2020, 1, 2))));
        assert!(!v.check(&Value::from(date(2020, 1, 1))));
    }

    #[test]
    fn iso_strings_are_read_as_dates() {
        assert!(before(date(2020, 1, 1)).check(&Value::from("1970-01-01")));
        assert!(after(date(2020, 1, 1)).check(&Value::from("2024-06-15")));
    }

    #[test]
    fn dateless_values_fail() {
        let v = before(date(2020, 1, 1));
        assert!(!v.check(&Value::from("not a date")));
        assert!(!v.check(&Value::from(7)));
    }
}
