//! Bind `KEY=VALUE` environment strings onto typed configuration structs
//!
//! `envbind` lets a program describe its configuration as a plain struct and
//! have it populated from the environment, without per-field parsing code.
//!
//! # Features
//!
//! - **Declarative**: `#[derive(Unmarshal)]` on any struct with named fields
//! - **Derived names**: `signing_key` reads `SIGNING_KEY`, `JSONString` reads `JSON_STRING`
//! - **Nested records**: inner fields inherit the outer variable name as a prefix
//! - **Tags**: explicit names, defaults, `required` and skipping via `#[env("...")]`
//! - **Custom hooks**: any type can parse itself by implementing [`UnmarshalEnv`]
//! - **Any source**: reads a list of `KEY=VALUE` strings, the process environment is optional
//!
//! # Value Parsing
//!
//! - Strings: `URL=https://example.com`
//! - Numbers: `TTL_SECONDS=60` (range-checked per width)
//! - Booleans: `DEBUG=true` (also `1`, `t`, `0`, `f`, ...)
//! - Bytes / chars: `Vec<u8>` and `Vec<char>` take the value as-is
//! - `Option<T>` / `Box<T>`: allocated only when a value is present
//! - JSON: wrap the field type in [`Json`]
//!
//! # Example
//!
//! ```rust
//! use envbind::Unmarshal;
//!
//! #[derive(Debug, Default, Unmarshal)]
//! struct Config {
//!     pub url: String,
//!     pub auth: Auth,
//! }
//!
//! #[derive(Debug, Default, Unmarshal)]
//! struct Auth {
//!     pub signing_key: String,
//!     pub ttl_seconds: u32,
//! }
//!
//! # fn main() -> Result<(), envbind::Error> {
//! let mut config = Config::default();
//! envbind::unmarshal(
//!     ["URL=https://x.com", "AUTH_SIGNING_KEY=k", "AUTH_TTL_SECONDS=60"],
//!     &mut config,
//! )?;
//! assert_eq!(config.url, "https://x.com");
//! assert_eq!(config.auth.signing_key, "k");
//! assert_eq!(config.auth.ttl_seconds, 60);
//! # Ok(())
//! # }
//! ```
//!
//! # Tags
//!
//! `#[env("<name>,<directive> <directive> ...")]`, every part optional.
//!
//! ## `#[env("NAME")]`
//!
//! Read `NAME` instead of the derived name. Explicit names are never prefixed.
//!
//! ## `#[env(",default=value")]`
//!
//! Value used when the variable is not set. Write `\s` for a space.
//!
//! ## `#[env(",required")]`
//!
//! Fail when the variable is not set and there is no default.
//!
//! ## `#[env("-")]`
//!
//! Never touch the field.
//!
//! ```rust
//! use envbind::Unmarshal;
//!
//! #[derive(Debug, Default, Unmarshal)]
//! struct Config {
//!     #[env("-")]
//!     pub internal: std::collections::HashMap<String, String>,
//!
//!     #[env(r",required default=John\sDoe")]
//!     pub name: String,
//!
//!     #[env(",default=blue")]
//!     pub favorite_color: String,
//!
//!     #[env("AUTH")]
//!     pub authentication: Authentication,
//! }
//!
//! #[derive(Debug, Default, Unmarshal)]
//! struct Authentication {
//!     pub signing_key: String,
//!     #[env("JWT_TTL")]
//!     pub ttl_seconds: u32,
//!     pub max_age: u32,
//! }
//!
//! # fn main() -> Result<(), envbind::Error> {
//! let mut config = Config::default();
//! envbind::unmarshal(["AUTH_SIGNING_KEY=key", "JWT_TTL=60"], &mut config)?;
//! assert_eq!(config.name, "John Doe");
//! assert_eq!(config.favorite_color, "blue");
//! assert_eq!(config.authentication.signing_key, "key");
//! assert_eq!(config.authentication.ttl_seconds, 60);
//! assert_eq!(config.authentication.max_age, 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! The first field that cannot be populated aborts the walk. The returned
//! [`Error`] names the record type and carries a [`FieldError`] with the
//! field path, the variable name and the cause.

mod coerce;
mod dispatch;
mod env;
mod error;
mod hook;
mod json;
mod name;
mod tag;
mod walk;

pub use coerce::Coerce;
pub use env::Env;
pub use envbind_derive::Unmarshal;
pub use error::{EnvError, Error, FieldError};
pub use hook::UnmarshalEnv;
pub use json::Json;
pub use name::derive_name;
pub use tag::TagDirectives;
pub use walk::Unmarshal;

// Re-export for macro-generated code
#[doc(hidden)]
pub mod __private {
    pub use crate::dispatch::{
        Probe, ViaCoerce, ViaHook, ViaHookWithoutDefault, ViaRecord, ViaUnsupported,
    };
    pub use crate::env::Env;
    pub use crate::error::FieldError;
    pub use crate::walk::{Binding, Scope};
}

/// Populate `target` from a list of `KEY=VALUE` strings.
///
/// Entries without `=` are ignored; for duplicate keys the last one wins.
///
/// # Errors
///
/// Returns the first field that could not be populated.
pub fn unmarshal<I, S, T>(pairs: I, target: &mut T) -> Result<(), Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    T: Unmarshal,
{
    unmarshal_with_prefix(pairs, target, "")
}

/// Like [`unmarshal`], prepending `prefix` to every derived top-level
/// variable name.
///
/// ```rust
/// use envbind::Unmarshal;
///
/// #[derive(Default, Unmarshal)]
/// struct Config {
///     pub port: u16,
/// }
///
/// # fn main() -> Result<(), envbind::Error> {
/// let mut config = Config::default();
/// envbind::unmarshal_with_prefix(["MYAPP_PORT=3000", "PORT=1"], &mut config, "MYAPP_")?;
/// assert_eq!(config.port, 3000);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns the first field that could not be populated.
pub fn unmarshal_with_prefix<I, S, T>(pairs: I, target: &mut T, prefix: &str) -> Result<(), Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    T: Unmarshal,
{
    unmarshal_env(&Env::from_pairs(pairs), target, prefix)
}

/// Populate `target` from an already built [`Env`].
///
/// # Errors
///
/// Returns the first field that could not be populated.
pub fn unmarshal_env<T: Unmarshal>(env: &Env, target: &mut T, prefix: &str) -> Result<(), Error> {
    target
        .unmarshal_fields(env, &walk::Scope::root(prefix))
        .map_err(Error::new::<T>)
}
