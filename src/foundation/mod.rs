//! Foundation of the validation engine.
//!
//! This module holds the pieces everything else builds on:
//!
//! - [`Value`] / [`ValueKind`] — the dynamic value model under validation
//! - [`Validate`] / [`ValidateExt`] — the validator protocol and its
//!   composition surface
//! - [`ValidationContext`] / [`Scope`] — per-call field-name and
//!   owning-instance context
//! - [`ValidationError`] — the single failure type crossing the engine
//!   boundary

mod context;
mod error;
mod traits;
mod value;

pub use context::{FieldId, Scope, ValidationContext};
pub use error::{ValidationError, ValidationResult};
pub use traits::{Validate, ValidateExt};
pub use value::{Map, Value, ValueKind};
