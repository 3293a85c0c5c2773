//! The `KEY=VALUE` mapping that fields are resolved against

use std::collections::HashMap;

/// Read-only mapping from variable name to raw value.
///
/// Built once per top-level call and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Build a mapping from `KEY=VALUE` strings.
    ///
    /// The key is everything before the first `=`. Entries without `=` are
    /// ignored and the last occurrence of a duplicate key wins.
    ///
    /// ```rust
    /// use envbind::Env;
    ///
    /// let env = Env::from_pairs(["A=1", "B", "A=2", "C=x=y"]);
    /// assert_eq!(env.get("A"), Some("2"));
    /// assert_eq!(env.get("B"), None);
    /// assert_eq!(env.get("C"), Some("x=y"));
    /// ```
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vars = pairs
            .into_iter()
            .filter_map(|pair| {
                pair.as_ref()
                    .split_once('=')
                    .map(|(key, value)| (key.to_string(), value.to_string()))
            })
            .collect();

        Self { vars }
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let mut vars = HashMap::new();
        let mut skipped = 0usize;

        for (key, value) in std::env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    vars.insert(key, value);
                }
                (key, _) => {
                    tracing::debug!(key = ?key, "Skipping non UTF-8 environment variable");
                    skipped += 1;
                }
            }
        }

        tracing::debug!(
            "Loaded {} environment variables ({} skipped)",
            vars.len(),
            skipped
        );

        Self { vars }
    }

    /// Raw value of `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of variables in the mapping.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
