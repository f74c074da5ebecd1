//! Validator combinators.
//!
//! [`Stack`] is the engine's workhorse: the ordered, fail-fast chain a
//! `Field` accumulates. [`And`], [`Or`] and [`Not`] provide ad hoc
//! composition through [`ValidateExt`](crate::foundation::ValidateExt).
//!
//! Every combinator is itself a [`Validate`](crate::foundation::Validate),
//! so combinators nest freely.

pub mod and;
pub mod not;
pub mod or;
pub mod stack;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
pub use stack::Stack;
