//! Macros for declaring validators with minimal boilerplate.
//!
//! # Available macros
//!
//! - [`validator!`] — complete validator: struct + `Validate` impl +
//!   constructor + optional factory fn
//! - [`ensure!`] — assertion-style early return for post-validation hooks
//! - [`attrs!`] — attribute-map literal for whole-object construction
//!
//! # Examples
//!
//! ```rust,ignore
//! use exodia::validator;
//! use exodia::foundation::{Validate, ValidationError, Value};
//!
//! validator! {
//!     /// Validates that an integer is even.
//!     pub Even;
//!     code = "even";
//!     rule(self, value, ctx) { value.as_i64().is_some_and(|n| n % 2 == 0) }
//!     field_message(self, value, field) { format!("{field}={value} is not even") }
//!     message(self, value) { format!("{value} is not even") }
//!     fn even();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Declares a complete validator: struct definition, `Validate`
/// implementation, constructor, and an optional factory function.
///
/// `#[derive(Debug, Clone)]` is always applied; unit validators also get
/// `Copy`, `PartialEq`, `Eq` and `Hash`. Extra derives go through the
/// normal attribute position.
///
/// Every validator declares both message forms of the engine contract:
/// `field_message` renders when the validation context names a field,
/// `message` renders for bare invocations. The produced error carries the
/// context's field path automatically.
///
/// # Variants
///
/// **Unit validator** (no parameters):
/// ```rust,ignore
/// validator! {
///     pub Required;
///     code = "required";
///     rule(self, value, ctx) { !value.is_null() }
///     field_message(self, value, field) { format!("{field} is required") }
///     message(self, value) { "got null, but a value is required".into() }
///     fn required();
/// }
/// ```
///
/// **Parameterized validator** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub MinLength { length: usize };
///     code = "min_length";
///     rule(self, value, ctx) { value.length().is_some_and(|l| l >= self.length) }
///     field_message(self, value, field) {
///         format!("{field}={value} must have length of at least {}", self.length)
///     }
///     message(self, value) {
///         format!("{value} must have length of at least {}", self.length)
///     }
///     fn min_length(length: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides the auto `new`, e.g. for
/// declaration-time parameter checks).
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        code = $code:literal;
        rule($self_:ident, $value:ident, $ctx:ident) $rule:block
        field_message($fm_self:ident, $fm_value:ident, $fm_field:ident) $fm:block
        message($m_self:ident, $m_value:ident) $m:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            code = $code;
            rule($self_, $value, $ctx) $rule
            field_message($fm_self, $fm_value, $fm_field) $fm
            message($m_self, $m_value) $m
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        code = $code:literal;
        rule($self_:ident, $value:ident, $ctx:ident) $rule:block
        field_message($fm_self:ident, $fm_value:ident, $fm_field:ident) $fm:block
        message($m_self:ident, $m_value:ident) $m:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        $crate::validator!(@impl $name; $code;
            ($self_, $value, $ctx) $rule
            ($fm_value, $fm_field) $fm
            ($m_value) $m);
    };

    // ── Parameterized + custom new + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        code = $code:literal;
        rule($self_:ident, $value:ident, $ctx:ident) $rule:block
        field_message($fm_self:ident, $fm_value:ident, $fm_field:ident) $fm:block
        message($m_self:ident, $m_value:ident) $m:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name; $code;
            ($self_, $value, $ctx) $rule
            ($fm_value, $fm_field) $fm
            ($m_value) $m);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Parameterized + auto new + factory fn ────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        code = $code:literal;
        rule($self_:ident, $value:ident, $ctx:ident) $rule:block
        field_message($fm_self:ident, $fm_value:ident, $fm_field:ident) $fm:block
        message($m_self:ident, $m_value:ident) $m:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name; $code;
            ($self_, $value, $ctx) $rule
            ($fm_value, $fm_field) $fm
            ($m_value) $m);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Shared Validate impl ─────────────────────────────────────────────
    (@impl $name:ident; $code:literal;
        ($self_:ident, $value:ident, $ctx:ident) $rule:block
        ($fm_value:ident, $fm_field:ident) $fm:block
        ($m_value:ident) $m:block
    ) => {
        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $value: &$crate::foundation::Value,
                $ctx: &$crate::foundation::ValidationContext<'_>,
            ) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let message: String = match $ctx.field_name() {
                        Some($fm_field) => {
                            let $fm_value = $value;
                            $fm
                        }
                        None => {
                            let $m_value = $value;
                            $m
                        }
                    };
                    Err($ctx.failure($code, message))
                }
            }

            fn name(&self) -> &'static str {
                stringify!($name)
            }
        }
    };
}

// ============================================================================
// ENSURE MACRO
// ============================================================================

/// Assertion-style early return for post-validation hooks.
///
/// Hooks return `Result<(), String>`; `ensure!` turns a failed condition
/// into an `Err` with the formatted message, which the instance
/// orchestrator re-raises as the engine's [`ValidationError`] with the
/// message unchanged.
///
/// # Examples
///
/// ```rust,ignore
/// use exodia::ensure;
///
/// let schema = Schema::builder()
///     .field("age", Field::integer().required())
///     .field("younger_brother_age", Field::integer().required())
///     .check(|attrs| {
///         ensure!(
///             attrs["younger_brother_age"].compare(&attrs["age"]).is_some_and(Ordering::is_lt),
///             "younger_brother can't be older!"
///         );
///         Ok(())
///     })
///     .build();
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)+) => {
        if !($cond) {
            return Err(format!($($msg)+));
        }
    };
}

// ============================================================================
// ATTRS MACRO
// ============================================================================

/// Builds the attribute map for whole-object construction.
///
/// # Examples
///
/// ```rust,ignore
/// use exodia::attrs;
///
/// let person = Instance::create(&schema, attrs! {
///     "age" => 30,
///     "younger_brother_age" => 10,
/// })?;
/// ```
#[macro_export]
macro_rules! attrs {
    () => { $crate::foundation::Map::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::foundation::Map::new();
        $(map.insert(::std::string::String::from($key), $crate::foundation::Value::from($value));)+
        map
    }};
}

// ============================================================================
// TESTS
// ============================================================================
