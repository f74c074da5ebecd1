//! Convenient single-import surface.
//!
//! ```rust
//! use exodia::prelude::*;
//! ```

pub use crate::combinators::{Stack, and, not, or};
pub use crate::field::Field;
pub use crate::foundation::{
    Map, Scope, Validate, ValidateExt, ValidationContext, ValidationError, ValidationResult,
    Value, ValueKind,
};
pub use crate::instance::Instance;
pub use crate::reference::{RefTarget, Reference};
pub use crate::schema::{Schema, SchemaBuilder};
pub use crate::validators::*;
pub use crate::{attrs, ensure, validator};
