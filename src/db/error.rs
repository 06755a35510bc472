//! Catalog-specific error types
//!
//! This module defines all error types that can occur during catalog storage
//! operations.
//!
//! # Error Types
//!
//! - **`Sqlite`**: Errors from the underlying SQLite engine (including the
//!   backing file being unavailable)
//! - **`AlreadyInitialized`**: `init` was run over a file that already carries
//!   the catalog schema (or a conflicting part of it)
//! - **`NotInitialized`**: a catalog operation was attempted before `init`
//!
//! All errors implement `std::error::Error` via the `thiserror` crate.
//!
//! Soft conditions (duplicate url, unknown tag label) are not errors; the
//! store reports them through `Option` return values instead.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog storage errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Represents a SQLite error
    #[error("Storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The catalog schema already exists at this path
    #[error("Catalog at {0} is already initialized")]
    AlreadyInitialized(PathBuf),

    /// The catalog schema does not exist yet
    #[error("Catalog at {0} is not initialized (run `linkr init` first)")]
    NotInitialized(PathBuf),
}
