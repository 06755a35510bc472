//! Testing utilities for linkr
//!
//! Provides a `TestCatalog` wrapper holding a temporary, pre-initialized
//! catalog file that is removed when the wrapper goes out of scope.
//!
//! Only available when compiled with `cfg(test)`.

use crate::db::Catalog;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary catalog that cleans up on drop
///
/// The backing file lives inside a [`tempfile::TempDir`] and the schema is
/// initialized up front, so tests start from the seeded state.
pub struct TestCatalog {
    dir: TempDir,
    catalog: Catalog,
}

impl TestCatalog {
    /// Create and initialize a catalog in a fresh temporary directory
    ///
    /// # Panics
    /// Panics if the directory, the catalog, or the schema cannot be created.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut catalog =
            Catalog::open(dir.path().join("links.db")).expect("failed to open test catalog");
        catalog.init().expect("failed to initialize test catalog");

        Self { dir, catalog }
    }

    /// Get a reference to the underlying catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a mutable reference for the transactional operations
    pub const fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Path to the backing catalog file
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("links.db")
    }
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_starts_seeded() {
        let test = TestCatalog::new();
        assert_eq!(test.catalog().list_tags().unwrap(), vec!["gif".to_string()]);
        assert!(test.path().exists());
    }

    #[test]
    fn test_catalog_cleanup_on_drop() {
        let path;
        {
            let test = TestCatalog::new();
            path = test.path();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }
}
