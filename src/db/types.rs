//! Typed records for the catalog's three tables
//!
//! Rows coming back from SQLite are converted into these structs immediately
//! after each query; no untyped row mapping leaves the `db` module.

use rusqlite::Row;

/// A cataloged URL with its id and free-text description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub description: String,
    pub url: String,
}

impl Item {
    /// Build an `Item` from a `SELECT itemid, description, url` row
    pub(super) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            // description is nullable in the schema
            description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            url: row.get(2)?,
        })
    }
}

/// A labeled category, referenced by id from the link table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub label: String,
}

impl Tag {
    /// Build a `Tag` from a `SELECT tagid, label` row
    pub(super) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            label: row.get(1)?,
        })
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
