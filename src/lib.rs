//! Linkr - a tag-based catalog for media links
//!
//! This library stores URLs, free-form tags, and the many-to-many links
//! between them in a single SQLite file, and exposes the catalog operations
//! used by the `linkr` command-line tool.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod db;
pub mod output;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum LinkrError {
    /// Catalog storage error
    #[error("Catalog error: {0}")]
    Catalog(#[from] db::CatalogError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
