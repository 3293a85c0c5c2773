//! Parsing of `#[env("...")]` tag text.
//!
//! A tag has the form `name,directive directive ...`. The segment before the
//! first comma is an optional explicit variable name; the rest is a
//! space-separated list of directives:
//!
//! - `required`: fail when neither the variable nor a default is present
//! - `default=<value>`: value used when the variable is absent; `\s` inside the
//!   value stands for a literal space
//!
//! Directive keys match case-insensitively. Tokens that are neither form are
//! ignored.

/// Explicit name that excludes a field from binding.
pub const SKIP: &str = "-";

/// Directives parsed from a field's tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDirectives {
    /// Explicit variable name, overriding the derived one.
    pub name: Option<String>,

    /// Value to use when the variable is absent.
    pub default: Option<String>,

    /// Whether a missing value is an error.
    pub required: bool,
}

impl TagDirectives {
    /// Parse raw tag text. Never fails: malformed directives are dropped.
    pub fn parse(raw: &str) -> Self {
        let (name, directives) = match raw.split_once(',') {
            Some((name, rest)) => (name, Some(rest)),
            None => (raw, None),
        };

        let name = name.trim();
        let mut tag = Self {
            name: (!name.is_empty()).then(|| name.to_string()),
            ..Self::default()
        };

        for token in directives.into_iter().flat_map(str::split_whitespace) {
            match token.split_once('=') {
                Some((key, value)) => {
                    if key.eq_ignore_ascii_case("default") {
                        tag.default = Some(value.replace("\\s", " "));
                    }
                }
                None => {
                    if token.eq_ignore_ascii_case("required") {
                        tag.required = true;
                    }
                }
            }
        }

        tag
    }

    /// Whether the field is excluded from binding (`#[env("-")]`).
    pub fn is_skipped(&self) -> bool {
        self.name.as_deref() == Some(SKIP)
    }
}
