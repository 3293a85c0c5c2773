//! Field identifier to environment variable name derivation

/// Derive the canonical environment variable name for a field identifier.
///
/// Characters are upper-cased and a single `_` is inserted at each boundary:
/// - before an upper-case letter followed by a lower-case one, unless it is
///   the first character (`JSONString` -> `JSON_STRING`)
/// - between a lower-case letter and a following upper-case one
///   (`fooBar` -> `FOO_BAR`)
/// - between a letter and a digit, in either order
///   (`JSON1String` -> `JSON_1_STRING`)
///
/// Underscores already present in the identifier count as boundaries, so
/// snake_case identifiers map directly (`ttl_seconds` -> `TTL_SECONDS`).
/// Separators are never doubled and never lead the result.
pub fn derive_name(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, &cur) in chars.iter().enumerate() {
        if cur == '_' {
            push_separator(&mut out);
            continue;
        }

        let next = chars.get(i + 1).copied();
        let boundary = match i.checked_sub(1).map(|p| chars[p]) {
            None => false,
            Some(prev) => {
                (cur.is_uppercase() && next.is_some_and(char::is_lowercase))
                    || (prev.is_lowercase() && cur.is_uppercase())
                    || (prev.is_alphabetic() && cur.is_numeric())
                    || (prev.is_numeric() && cur.is_alphabetic())
            }
        };

        if boundary {
            push_separator(&mut out);
        }
        out.extend(cur.to_uppercase());
    }

    out
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('_') {
        out.push('_');
    }
}
