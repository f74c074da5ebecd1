//! # exodia
//!
//! A declarative data-validation engine: describe an object's fields once,
//! with a fluent builder, and every way a value reaches the object — a
//! standalone check, a field-level validation, an attribute write, or
//! whole-object construction — enforces the same rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use exodia::prelude::*;
//!
//! let person = Schema::builder()
//!     .field("first_name", Field::string().required().min(2).max(30))
//!     .field("age", Field::integer().required().between(0, 150))
//!     .build();
//!
//! let nick = Instance::create(person, attrs! {
//!     "first_name" => "Nick",
//!     "age" => 30,
//! })?;
//! assert_eq!(nick.get("age"), Some(&Value::Int(30)));
//! # Ok::<(), exodia::foundation::ValidationError>(())
//! ```
//!
//! ## Building blocks
//!
//! - [`foundation`] — the dynamic [`Value`](foundation::Value) model, the
//!   [`Validate`](foundation::Validate) trait, contexts and errors
//! - [`validators`] — the built-in validators, from [`required`](validators::required)
//!   to [`matches`](validators::matches)
//! - [`combinators`] — [`Stack`](combinators::Stack) and the
//!   `.and()` / `.or()` / `.not()` composition surface
//! - [`Field`] — the fluent per-attribute builder
//! - [`Schema`] / [`Instance`] — immutable declarations and validated storage
//!
//! Custom validators come from the [`validator!`] macro, or from
//! implementing [`Validate`](foundation::Validate) directly.

// ValidationError is the fundamental error type for all validators — boxing it
// would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex types
// that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod field;
pub mod foundation;
pub mod instance;
mod macros;
pub mod prelude;
pub mod reference;
pub mod schema;
pub mod validators;

pub use field::Field;
pub use instance::Instance;
pub use reference::{RefTarget, Reference};
pub use schema::{Schema, SchemaBuilder};
