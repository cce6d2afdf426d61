//! Property-based tests for app naming and catalog listings.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use daggerwork::catalog::AppCatalog;
use daggerwork::core::naming;
use daggerwork::core::types::AppName;

/// Strategy for generating characters allowed in display names.
fn display_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        Just(' '),
        Just('-'),
        Just('_'),
        Just('.'),
        Just('é'),
    ]
}

/// Strategy for generating valid display names.
fn valid_display_name() -> impl Strategy<Value = String> {
    prop::collection::vec(display_char(), 1..24).prop_filter_map("must be a valid app name", |chars| {
        let name: String = chars.into_iter().collect();
        AppName::new(name.clone()).ok().map(|_| name)
    })
}

proptest! {
    /// Decoding the directory form of a name gives the name back.
    #[test]
    fn bracket_form_decodes_to_display(name in valid_display_name()) {
        let dir = naming::encode(&name);
        prop_assert_eq!(naming::decode(&dir), Some(name.as_str()));

        let app = AppName::new(name.clone()).unwrap();
        prop_assert_eq!(AppName::from_dir_name(&app.dir_name()), Some(app));
    }

    /// Names containing a path separator or bracket are always rejected.
    #[test]
    fn separators_and_brackets_rejected(
        prefix in valid_display_name(),
        bad in prop::sample::select(vec!['/', '\\', '[', ']']),
        suffix in valid_display_name(),
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        prop_assert!(AppName::new(name).is_err());
    }

    /// Directory names without brackets are never listed as apps.
    #[test]
    fn unbracketed_directories_never_decode(name in "[a-zA-Z0-9 _.-]{1,20}") {
        prop_assert_eq!(naming::decode(&name), None);
        prop_assert!(AppName::from_dir_name(&name).is_none());
    }

    /// Listing is sorted, idempotent, and contains exactly the bracketed apps.
    #[test]
    fn listing_sorted_and_stable(
        names in prop::collection::btree_set(valid_display_name(), 0..8),
        plain in prop::collection::btree_set("[a-z]{1,8}", 0..4),
    ) {
        let temp = TempDir::new().unwrap();
        for name in &names {
            fs::create_dir(temp.path().join(naming::encode(name))).unwrap();
        }
        for dir in &plain {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }

        let catalog = AppCatalog::new("main.py");
        let first = catalog.list_apps(temp.path()).unwrap();
        let second = catalog.list_apps(temp.path()).unwrap();
        prop_assert_eq!(&first, &second);

        let listed: Vec<&str> = first.iter().map(AppName::as_str).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(listed, expected);
    }
}

/// Strategy for inner texts that exist on disk but could not be typed as a
/// new app name: padded, bracketed, or dot names.
fn found_only_inner() -> impl Strategy<Value = String> {
    prop_oneof![
        valid_display_name().prop_map(|n| format!(" {n}")),
        valid_display_name().prop_map(|n| format!("{n} ")),
        valid_display_name().prop_map(|n| format!("{n} [beta]")),
        valid_display_name().prop_map(|n| format!("[{n}]")),
        Just(".".to_string()),
        Just("..".to_string()),
    ]
}

proptest! {
    /// Every bracketed directory on disk is listed with its brackets stripped.
    #[test]
    fn every_bracketed_directory_is_listed(
        inners in prop::collection::btree_set(found_only_inner(), 1..6),
    ) {
        let temp = TempDir::new().unwrap();
        for inner in &inners {
            fs::create_dir(temp.path().join(naming::encode(inner))).unwrap();
        }

        let apps = AppCatalog::new("main.py").list_apps(temp.path()).unwrap();
        let listed: Vec<&str> = apps.iter().map(AppName::as_str).collect();
        let expected: Vec<&str> = inners.iter().map(String::as_str).collect();
        prop_assert_eq!(listed, expected);
    }
}
