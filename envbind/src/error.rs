//! Error types for binding environment variables onto struct fields

/// Why a single field could not be populated.
///
/// This is the cause carried by every [`FieldError`]:
/// - Required variable without a value or default
/// - Field type the walker cannot coerce into
/// - Optional hook type that cannot be default-constructed
/// - Value rejected by the type's parser
/// - Failure reported by a custom [`UnmarshalEnv`](crate::UnmarshalEnv) hook
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Field is marked `required`, the variable is not set and no default exists.
    #[error("required but not set")]
    Missing,

    /// Field type is not a record, does not implement the custom hook and
    /// cannot be coerced from a string.
    #[error("unsupported field type {type_name}")]
    Unsupported {
        /// Fully unwrapped type name of the field
        type_name: &'static str,
    },

    /// Field is `Option<T>` where `T` has a custom hook but no `Default`, so
    /// a `None` cannot be materialized before calling the hook.
    #[error("hook type {type_name} behind Option must implement Default")]
    HookWithoutDefault {
        /// Type name of the hook type behind the `Option`
        type_name: &'static str,
    },

    /// Value was present but could not be parsed into the target type.
    #[error("failed to parse {value:?} as {type_name}: {message}")]
    Parse {
        /// Raw value that failed to parse
        value: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: &'static str,
        /// Error message from the parser
        message: String,
    },

    /// A custom hook rejected the value.
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}

impl EnvError {
    /// Create a parse error for target type `T`
    pub fn parse_error<T>(value: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            value: value.into(),
            type_name: std::any::type_name::<T>(),
            message: message.to_string(),
        }
    }

    /// Create an unsupported field type error for `T`
    pub fn unsupported<T: ?Sized>() -> Self {
        Self::Unsupported {
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// A failure attributed to one field.
///
/// Raised once at the field where the problem is detected and propagated
/// unchanged through nested records.
#[derive(Debug, thiserror::Error)]
#[error("failed to unmarshal environment variable {env_var:?} into field {field:?}: {source}")]
pub struct FieldError {
    field: String,
    env_var: String,
    #[source]
    source: EnvError,
}

impl FieldError {
    pub(crate) fn new(
        source: EnvError,
        field: impl Into<String>,
        env_var: impl Into<String>,
    ) -> Self {
        let err = Self {
            field: field.into(),
            env_var: env_var.into(),
            source,
        };
        tracing::debug!(field = %err.field, env_var = %err.env_var, "{}", err.source);
        err
    }

    /// Dotted path of the field, e.g. `auth.signing_key`.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Resolved environment variable name, e.g. `AUTH_SIGNING_KEY`.
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// The underlying cause.
    pub fn cause(&self) -> &EnvError {
        &self.source
    }

    /// Consume the error and return the underlying cause.
    pub fn into_cause(self) -> EnvError {
        self.source
    }
}

/// Error returned by the top-level entry points.
///
/// Wraps the [`FieldError`] that aborted the walk with the name of the
/// record type being populated.
#[derive(Debug, thiserror::Error)]
#[error("failed to unmarshal environment into {record}: {source}")]
pub struct Error {
    record: &'static str,
    #[source]
    source: FieldError,
}

impl Error {
    pub(crate) fn new<T: ?Sized>(source: FieldError) -> Self {
        Self {
            record: std::any::type_name::<T>(),
            source,
        }
    }

    /// Type name of the record being populated.
    pub fn record(&self) -> &'static str {
        self.record
    }

    /// The field-level failure.
    pub fn field_error(&self) -> &FieldError {
        &self.source
    }

    /// Dotted path of the failing field.
    pub fn field(&self) -> &str {
        self.source.field()
    }

    /// Environment variable the failing field is mapped to.
    pub fn env_var(&self) -> &str {
        self.source.env_var()
    }

    /// The underlying cause.
    pub fn cause(&self) -> &EnvError {
        self.source.cause()
    }
}
