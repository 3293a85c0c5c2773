//! Struct walking: per-field binding resolution
//!
//! `#[derive(Unmarshal)]` generates an [`Unmarshal`] impl that visits the
//! struct's exported fields in declaration order. For each field it calls
//! [`Binding::resolve`] and, unless the field is skipped, hands the binding to
//! the strategy selected for the field type (see [`crate::dispatch`]):
//!
//! 1. Parse the tag; an explicit name of `-` skips the field.
//! 2. The variable name is the explicit name, or scope prefix + derived name.
//! 3. Absent variable: use the default if any, fail if `required`, otherwise
//!    continue without a value.
//! 4. Hook types receive the value, if one was resolved.
//! 5. Records are walked with the field's path and variable name as the new
//!    prefixes, whether or not a value was resolved.
//! 6. Anything else is coerced when a value was resolved.

use crate::coerce::Coerce;
use crate::env::Env;
use crate::error::{EnvError, Error, FieldError};
use crate::hook::UnmarshalEnv;
use crate::name::derive_name;
use crate::tag::TagDirectives;

/// A record whose fields can be populated from an [`Env`].
///
/// Implement it with `#[derive(Unmarshal)]`:
///
/// - `#[env("NAME")]` binds a field to an explicit variable
/// - `#[env(",default=value")]` supplies a default (`\s` is a space)
/// - `#[env(",required")]` fails when the variable and default are missing
/// - `#[env("-")]` skips the field
///
/// Only fields with explicit visibility (`pub`, `pub(crate)`, ...) are bound.
pub trait Unmarshal {
    /// Populate the fields of `self` within `scope`.
    #[doc(hidden)]
    fn unmarshal_fields(&mut self, env: &Env, scope: &Scope) -> Result<(), FieldError>;

    /// Build a value from the process environment.
    ///
    /// # Errors
    ///
    /// Returns the first field that could not be populated.
    fn from_env() -> Result<Self, Error>
    where
        Self: Default + Sized,
    {
        Self::from_env_with_prefix("")
    }

    /// Build a value from the process environment, prepending `prefix` to
    /// every derived variable name.
    ///
    /// # Errors
    ///
    /// Returns the first field that could not be populated.
    fn from_env_with_prefix(prefix: &str) -> Result<Self, Error>
    where
        Self: Default + Sized,
    {
        let mut out = Self::default();
        crate::unmarshal_env(&Env::from_process(), &mut out, prefix)?;
        Ok(out)
    }
}

/// Path and variable-name prefixes inherited from enclosing records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    path: String,
    env_prefix: String,
}

impl Scope {
    /// Scope of a top-level record.
    pub fn root(env_prefix: impl Into<String>) -> Self {
        Self {
            path: String::new(),
            env_prefix: env_prefix.into(),
        }
    }
}

/// Resolution state of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    field_path: String,
    env_var: String,
    raw: Option<String>,
}

impl Binding {
    /// Resolve the binding for field `ident` with raw tag text `tag`.
    ///
    /// Returns `Ok(None)` for skipped fields.
    ///
    /// # Errors
    ///
    /// A `required` field with neither a variable nor a default.
    pub fn resolve(
        ident: &str,
        tag: &str,
        scope: &Scope,
        env: &Env,
    ) -> Result<Option<Self>, FieldError> {
        let tag = TagDirectives::parse(tag);
        if tag.is_skipped() {
            return Ok(None);
        }

        let ident = ident.strip_prefix("r#").unwrap_or(ident);
        let field_path = format!("{}{}", scope.path, ident);
        let env_var = match tag.name {
            Some(name) => name,
            None => format!("{}{}", scope.env_prefix, derive_name(ident)),
        };

        let raw = match env.get(&env_var) {
            Some(value) => {
                tracing::trace!(field = %field_path, env_var = %env_var, "Found in environment");
                Some(value.to_string())
            }
            None => match tag.default {
                Some(default) => {
                    tracing::trace!(field = %field_path, env_var = %env_var, "Using default value");
                    Some(default)
                }
                None if tag.required => {
                    return Err(FieldError::new(EnvError::Missing, field_path, env_var));
                }
                None => {
                    tracing::trace!(field = %field_path, env_var = %env_var, "Not set");
                    None
                }
            },
        };

        Ok(Some(Self {
            field_path,
            env_var,
            raw,
        }))
    }

    /// Dotted field path.
    pub fn field_path(&self) -> &str {
        &self.field_path
    }

    /// Resolved variable name.
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// Resolved value, from the environment or the default.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Scope for the fields of a record stored in this field.
    pub fn nested_scope(&self) -> Scope {
        Scope {
            path: format!("{}.", self.field_path),
            env_prefix: format!("{}_", self.env_var),
        }
    }

    fn error(&self, cause: EnvError) -> FieldError {
        FieldError::new(cause, self.field_path.as_str(), self.env_var.as_str())
    }

    /// Hand the value to a custom hook, if a value was resolved.
    pub(crate) fn apply_hook<T: UnmarshalEnv>(&self, slot: &mut T) -> Result<(), FieldError> {
        match self.raw() {
            Some(raw) => slot
                .unmarshal_env(raw)
                .map_err(|e| self.error(EnvError::Custom(e))),
            None => Ok(()),
        }
    }

    /// Walk a nested record.
    pub(crate) fn apply_record<T: Unmarshal>(
        &self,
        slot: &mut T,
        env: &Env,
    ) -> Result<(), FieldError> {
        slot.unmarshal_fields(env, &self.nested_scope())
    }

    /// Coerce the value, if one was resolved. `slot` is left unchanged on failure.
    pub(crate) fn apply_coerce<T: Coerce>(&self, slot: &mut T) -> Result<(), FieldError> {
        if let Some(raw) = self.raw() {
            *slot = T::coerce(raw).map_err(|e| self.error(e))?;
        }
        Ok(())
    }

    /// Reject an optional hook type lacking `Default`.
    pub(crate) fn reject_hook_without_default(&self, type_name: &'static str) -> FieldError {
        self.error(EnvError::HookWithoutDefault { type_name })
    }

    /// Reject a field type nothing can populate.
    pub(crate) fn reject(&self, type_name: &'static str) -> FieldError {
        self.error(EnvError::Unsupported { type_name })
    }
}
