//! Built-in validators.
//!
//! Every validator implements [`Validate`](crate::foundation::Validate)
//! and carries two message forms: one field-qualified for schema-driven
//! validation, one value-qualified for standalone use. Factory functions
//! (`required()`, `min_length(3)`, `between(1, 10)`, ...) are the
//! conventional way to build them.
//!
//! # Categories
//!
//! - **presence** — [`Required`], [`Optional`]
//! - **typing** — [`OfType`], [`IsDate`]
//! - **length** — [`Length`], [`MinLength`], [`MaxLength`], [`NotEmpty`]
//! - **range** — [`MinValue`], [`MaxValue`], [`Between`], [`LessThan`],
//!   [`GreaterThan`], [`Equal`], [`MultipleOf`]
//! - **choice** — [`OneOf`]
//! - **temporal** — [`Before`], [`After`]
//! - **pattern** — [`Matches`]
//! - **func** — [`Predicate`]

pub mod choice;
pub mod func;
pub mod length;
pub mod pattern;
pub mod presence;
pub mod range;
pub mod temporal;
pub mod typing;

pub use choice::{OneOf, one_of};
pub use func::{Predicate, predicate};
pub use length::{Length, MaxLength, MinLength, NotEmpty, length, max_length, min_length, not_empty};
pub use pattern::{Matches, matches};
pub use presence::{Optional, Required, optional, required};
pub use range::{
    Between, Equal, GreaterThan, LessThan, MaxValue, MinValue, MultipleOf, between, equal,
    greater_than, less_than, max_value, min_value, multiple_of,
};
pub use temporal::{After, Before, after, before};
pub use typing::{IsDate, OfType, is_date, of_type};
