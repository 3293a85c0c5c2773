//! JSON-encoded values

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::UnmarshalEnv;

/// Field wrapper that deserializes its raw value as JSON.
///
/// Use it for values the built-in coercion does not cover, such as lists or
/// maps.
///
/// ```rust
/// use envbind::{Json, Unmarshal};
///
/// #[derive(Default, Unmarshal)]
/// struct Config {
///     pub tags: Json<Vec<String>>,
/// }
///
/// # fn main() -> Result<(), envbind::Error> {
/// let mut config = Config::default();
/// envbind::unmarshal([r#"TAGS=["prod","api"]"#], &mut config)?;
/// assert_eq!(*config.tags, vec!["prod", "api"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Unwrap the deserialized value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: DeserializeOwned> UnmarshalEnv for Json<T> {
    fn unmarshal_env(&mut self, raw: &str) -> anyhow::Result<()> {
        self.0 = serde_json::from_str(raw)?;
        Ok(())
    }
}
