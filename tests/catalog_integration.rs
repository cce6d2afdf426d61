//! Catalog behavior against real directory trees.

use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

use daggerwork::catalog::{AppCatalog, CatalogError};
use daggerwork::core::types::AppName;

fn name(s: &str) -> AppName {
    AppName::new(s).unwrap()
}

#[test]
fn created_app_is_runnable_leaf() {
    let root = TempDir::new().unwrap();
    let catalog = AppCatalog::new("main.py");

    catalog.create_app(root.path(), &name("Foo")).unwrap();

    root.child("[Foo]/main.py")
        .assert(predicate::str::contains("Hello from Foo!"));

    let entry = catalog.inspect(root.path(), &name("Foo"));
    assert!(entry.has_entrypoint);
    assert!(entry.sub_entries.is_empty());
    assert!(!entry.is_group());
}

#[test]
fn create_existing_app_changes_nothing() {
    let root = TempDir::new().unwrap();
    root.child("[Foo]/main.py").write_str("print('mine')\n").unwrap();
    let catalog = AppCatalog::new("main.py");

    let err = catalog.create_app(root.path(), &name("Foo")).unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyExists(ref n) if n.as_str() == "Foo"));

    root.child("[Foo]/main.py").assert("print('mine')\n");
}

#[test]
fn nested_groups_are_inspected_level_by_level() {
    let root = TempDir::new().unwrap();
    root.child("[Foo]/main.py").touch().unwrap();
    root.child("[Foo]/[Bar]/[Baz]/main.py").touch().unwrap();
    root.child("[Foo]/notes").create_dir_all().unwrap();
    let catalog = AppCatalog::new("main.py");

    let foo = catalog.inspect(root.path(), &name("Foo"));
    assert!(foo.has_entrypoint);
    assert_eq!(foo.sub_entries, vec![name("Bar")]);

    let bar = catalog.inspect(&foo.directory, &name("Bar"));
    assert!(!bar.has_entrypoint);
    assert_eq!(bar.sub_entries, vec![name("Baz")]);

    let baz = catalog.inspect(&bar.directory, &name("Baz"));
    assert!(baz.has_entrypoint);
    assert!(!baz.is_group());
}

#[test]
fn entrypoint_name_is_configurable() {
    let root = TempDir::new().unwrap();
    root.child("[Tool]/main.py").touch().unwrap();
    let catalog = AppCatalog::new("run.sh");

    let entry = catalog.inspect(root.path(), &name("Tool"));
    assert!(!entry.has_entrypoint);
    assert_eq!(entry.entrypoint, root.child("[Tool]/run.sh").path());

    catalog.create_app(root.path(), &name("Other")).unwrap();
    root.child("[Other]/run.sh")
        .assert(predicate::str::starts_with("#!/bin/sh"));
}

#[test]
fn files_with_bracket_names_are_not_apps() {
    let root = TempDir::new().unwrap();
    root.child("[Fake]").write_str("not a dir").unwrap();
    root.child("[Real]").create_dir_all().unwrap();

    let apps = AppCatalog::new("main.py").list_apps(root.path()).unwrap();
    assert_eq!(apps, vec![name("Real")]);
}

#[test]
fn missing_root_lists_empty_and_ensure_root_creates_it() {
    let parent = TempDir::new().unwrap();
    let root = parent.child("apps");
    let catalog = AppCatalog::new("main.py");

    assert!(catalog.list_apps(root.path()).unwrap().is_empty());
    assert!(catalog.ensure_root(root.path()).unwrap());
    assert!(!catalog.ensure_root(root.path()).unwrap());
    root.assert(predicate::path::is_dir());
}
