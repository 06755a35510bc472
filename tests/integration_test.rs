//! Integration tests for the linkr catalog
//!
//! These tests verify end-to-end functionality by creating temporary catalog
//! files and exercising complete command workflows through the library API.

use linkr::db::{Catalog, CatalogError};
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create an initialized catalog in a temporary directory
fn setup_catalog() -> (Catalog, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = Catalog::open(dir.path().join("links.db")).unwrap();
    catalog.init().unwrap();
    (catalog, dir)
}

fn tags(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_init_add_search_workflow() {
    let (mut catalog, _dir) = setup_catalog();

    catalog
        .add_item("http://example.com/cat.gif", &tags(&["cats", "funny"]), "a cat")
        .unwrap();
    catalog
        .add_item("http://example.com/dog.gif", &tags(&["dogs", "funny"]), "a dog")
        .unwrap();

    let funny = catalog.search(&tags(&["funny"])).unwrap();
    assert_eq!(funny.len(), 2);

    let cats = catalog.search(&tags(&["cats", "funny"])).unwrap();
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].url, "http://example.com/cat.gif");
    assert_eq!(cats[0].description, "a cat");

    assert!(catalog.search(&tags(&["birds"])).unwrap().is_empty());
}

#[test]
fn test_add_duplicate_url_keeps_catalog_unchanged() {
    let (mut catalog, _dir) = setup_catalog();

    catalog
        .add_item("http://x", &tags(&["first"]), "original")
        .unwrap();
    let items_before = catalog.list_items().unwrap();

    let result = catalog
        .add_item("http://x", &tags(&["second"]), "replacement")
        .unwrap();
    assert_eq!(result, None);
    assert_eq!(catalog.list_items().unwrap(), items_before);
    assert!(!catalog.tag_exists("second").unwrap());
}

#[test]
fn test_update_workflow_replaces_entry_and_keeps_orphans() {
    let (mut catalog, _dir) = setup_catalog();

    let first = catalog
        .add_item("http://x", &tags(&["old-tag"]), "old")
        .unwrap()
        .unwrap();
    let second = catalog
        .update_item("http://x", &tags(&["new-tag"]), "new")
        .unwrap()
        .unwrap();
    assert_ne!(first, second);

    // Exactly one live item with the url, carrying the new metadata
    let live: Vec<_> = catalog
        .list_items()
        .unwrap()
        .into_iter()
        .filter(|item| item.url == "http://x")
        .collect();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].id, second);
    assert_eq!(live[0].description, "new");

    // The old link row persists as an orphan but no longer resolves to an item
    assert_eq!(catalog.tag_usage("old-tag").unwrap(), 1);
    assert!(catalog.search(&tags(&["old-tag"])).unwrap().is_empty());
    assert_eq!(catalog.search(&tags(&["new-tag"])).unwrap().len(), 1);
}

#[test]
fn test_list_tags_reflects_lazy_creation() {
    let (mut catalog, _dir) = setup_catalog();

    catalog
        .add_item("http://a", &tags(&["cats", "funny"]), "")
        .unwrap();
    catalog.add_item("http://b", &tags(&["cats"]), "").unwrap();

    let labels = catalog.list_tags().unwrap();
    assert_eq!(labels.len(), 3); // seed "gif" plus the two new labels
    assert!(labels.contains(&"gif".to_string()));
    assert!(labels.contains(&"cats".to_string()));
    assert!(labels.contains(&"funny".to_string()));

    assert_eq!(catalog.tag_usage("cats").unwrap(), 2);
    assert_eq!(catalog.tag_usage("gif").unwrap(), 0);
}

#[test]
fn test_catalog_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("links.db");

    {
        let mut catalog = Catalog::open(&path).unwrap();
        catalog.init().unwrap();
        catalog
            .add_item("http://persist", &tags(&["saved"]), "kept")
            .unwrap();
    }

    {
        let catalog = Catalog::open(&path).unwrap();
        catalog.ensure_initialized().unwrap();

        let items = catalog.search(&tags(&["saved"])).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "http://persist");
        assert_eq!(items[0].description, "kept");
    }
}

#[test]
fn test_reinit_existing_catalog_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.db");

    {
        let mut catalog = Catalog::open(&path).unwrap();
        catalog.init().unwrap();
    }

    let mut catalog = Catalog::open(&path).unwrap();
    let result = catalog.init();
    assert!(matches!(result, Err(CatalogError::AlreadyInitialized(_))));
}

#[test]
fn test_uninitialized_catalog_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::open(dir.path().join("links.db")).unwrap();

    let result = catalog.ensure_initialized();
    assert!(matches!(result, Err(CatalogError::NotInitialized(_))));
}

#[test]
fn test_item_ids_grow_monotonically() {
    let (mut catalog, _dir) = setup_catalog();

    let a = catalog.add_item("http://a", &tags(&["t"]), "").unwrap();
    let b = catalog.add_item("http://b", &tags(&["t"]), "").unwrap();
    assert_eq!(a, Some(1)); // seed dummy item holds id 0
    assert_eq!(b, Some(2));

    // The replacement takes a fresh id; the deleted one is never reused
    let c = catalog.update_item("http://a", &tags(&["t"]), "").unwrap();
    assert_eq!(c, Some(3));
}
