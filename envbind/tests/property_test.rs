//! Property-based tests for environment variable name derivation.

use envbind::{derive_name, TagDirectives};
use proptest::prelude::*;

// Deriving from an already derived name adds no further separators
proptest! {
    #[test]
    fn test_derive_name_is_stable(ident in "[A-Za-z][A-Za-z0-9]{0,24}") {
        let once = derive_name(&ident);
        prop_assert_eq!(derive_name(&once), once);
    }
}

// Output is upper-case and separators are never doubled, leading or trailing
proptest! {
    #[test]
    fn test_derive_name_separators(ident in "[A-Za-z][A-Za-z0-9]{0,24}") {
        let name = derive_name(&ident);
        prop_assert!(!name.starts_with('_'));
        prop_assert!(!name.ends_with('_'));
        prop_assert!(!name.contains("__"));
        prop_assert_eq!(name.to_uppercase(), name.clone());
        prop_assert_eq!(name.replace('_', ""), ident.to_uppercase());
    }
}

// Snake-case identifiers map to their upper-case form when no digits are involved
proptest! {
    #[test]
    fn test_derive_name_snake_case(ident in "[a-z]{1,8}(_[a-z]{1,8}){0,3}") {
        prop_assert_eq!(derive_name(&ident), ident.to_uppercase());
    }
}

// The tag parser accepts any input
proptest! {
    #[test]
    fn test_tag_parse_never_panics(raw in "\\PC*") {
        let tag = TagDirectives::parse(&raw);
        if let Some(name) = &tag.name {
            prop_assert_eq!(name.trim(), name.as_str());
            prop_assert!(!name.is_empty());
        }
    }
}

// Defaults survive the `\s` escape round trip
proptest! {
    #[test]
    fn test_tag_default_space_escape(words in prop::collection::vec("[a-z0-9]{1,6}", 1..4)) {
        let raw = format!(",default={}", words.join("\\s"));
        let tag = TagDirectives::parse(&raw);
        let expected = words.join(" ");
        prop_assert_eq!(tag.default.as_deref(), Some(expected.as_str()));
    }
}
