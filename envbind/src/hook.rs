//! Custom conversion hook

/// Custom conversion from a raw environment value.
///
/// A field whose type implements this trait is handed the raw value instead
/// of going through built-in coercion or record traversal. The hook only runs
/// when a value (from the environment or a `default=` directive) is present;
/// otherwise the field is left untouched.
///
/// `Option<T>` (for `T: UnmarshalEnv + Default`) and `Box<T>` implement the
/// trait as well, so hooks are found behind any depth of indirection. A `None`
/// is only replaced once the inner hook succeeds.
///
/// `Default` is what builds the value a `None` is replaced with. A field of
/// type `Option<T>` where `T` implements this trait but not `Default` fails
/// with [`EnvError::HookWithoutDefault`](crate::EnvError::HookWithoutDefault).
///
/// # Example
///
/// ```rust
/// use envbind::{Unmarshal, UnmarshalEnv};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Ids(Vec<String>);
///
/// impl UnmarshalEnv for Ids {
///     fn unmarshal_env(&mut self, raw: &str) -> anyhow::Result<()> {
///         self.0 = raw.split(',').map(|s| s.trim().to_string()).collect();
///         Ok(())
///     }
/// }
///
/// #[derive(Default, Unmarshal)]
/// struct Config {
///     pub valid_ids: Ids,
///     pub fallback_ids: Option<Ids>,
/// }
///
/// # fn main() -> Result<(), envbind::Error> {
/// let mut config = Config::default();
/// envbind::unmarshal(["VALID_IDS=id1, id2"], &mut config)?;
/// assert_eq!(config.valid_ids, Ids(vec!["id1".into(), "id2".into()]));
/// assert_eq!(config.fallback_ids, None);
/// # Ok(())
/// # }
/// ```
pub trait UnmarshalEnv {
    /// Populate `self` from `raw`.
    ///
    /// # Errors
    ///
    /// Any error is reported as the field's failure cause.
    fn unmarshal_env(&mut self, raw: &str) -> anyhow::Result<()>;
}

impl<T: UnmarshalEnv + Default> UnmarshalEnv for Option<T> {
    fn unmarshal_env(&mut self, raw: &str) -> anyhow::Result<()> {
        match self {
            Some(inner) => inner.unmarshal_env(raw),
            None => {
                let mut inner = T::default();
                inner.unmarshal_env(raw)?;
                *self = Some(inner);
                Ok(())
            }
        }
    }
}

impl<T: UnmarshalEnv> UnmarshalEnv for Box<T> {
    fn unmarshal_env(&mut self, raw: &str) -> anyhow::Result<()> {
        (**self).unmarshal_env(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Upper(String);

    impl UnmarshalEnv for Upper {
        fn unmarshal_env(&mut self, raw: &str) -> anyhow::Result<()> {
            if raw.is_empty() {
                anyhow::bail!("empty value");
            }
            self.0 = raw.to_uppercase();
            Ok(())
        }
    }

    #[test]
    fn test_option_materializes_on_value() {
        let mut slot: Option<Upper> = None;
        slot.unmarshal_env("abc").unwrap();
        assert_eq!(slot, Some(Upper("ABC".to_string())));
    }

    #[test]
    fn test_nested_indirection_materializes_every_level() {
        let mut slot: Option<Box<Option<Upper>>> = None;
        slot.unmarshal_env("abc").unwrap();
        assert_eq!(slot, Some(Box::new(Some(Upper("ABC".to_string())))));
    }

    #[test]
    fn test_existing_value_is_reused() {
        let mut slot = Some(Upper("old".to_string()));
        slot.unmarshal_env("new").unwrap();
        assert_eq!(slot, Some(Upper("NEW".to_string())));
    }

    #[test]
    fn test_hook_error_propagates() {
        let mut slot: Option<Upper> = None;
        let err = slot.unmarshal_env("").unwrap_err();
        assert_eq!(err.to_string(), "empty value");
        assert_eq!(slot, None);
    }
}
