//! Catalog storage for linkr
//!
//! Provides a clean API for storing and retrieving url-tag pairings
//! using a single SQLite file as the backing store.
//!
//! The file holds three tables:
//! - `items`: cataloged urls with free-text descriptions
//! - `tags`: tag labels
//! - `itemtags`: many-to-many links between items and tags
//!
//! Record ids are assigned as `max(existing) + 1` and never reused. The link
//! table carries no uniqueness constraint and is never cleaned up: an item
//! deleted by `update_item` leaves its link rows behind as orphans, and the
//! store tolerates them on every read path.

use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{Item, Tag};

const TABLES: [&str; 3] = ["items", "tags", "itemtags"];

/// Catalog handle that owns the SQLite connection for the process lifetime
///
/// The connection is opened eagerly in `open` and released when the handle is
/// dropped; there is no lazily-opened ambient state.
pub struct Catalog {
    conn: Connection,
    path: PathBuf,
}

impl Catalog {
    /// Opens the catalog file at the specified path, creating it if absent
    ///
    /// Opening does not create the schema; run [`Catalog::init`] once per
    /// file before using any other operation.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the backing file cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let conn = Connection::open(&path)?;
        Ok(Self {
            conn,
            path: path.as_ref().to_path_buf(),
        })
    }

    /// Create the three tables and seed records, all in one transaction
    ///
    /// Seeds tag 0 = "gif" and item 0 = a dummy item with an empty url.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::AlreadyInitialized` if any of the three tables
    /// already exists (including a partial schema left by a conflicting
    /// file), or `CatalogError::Sqlite` if creation fails.
    pub fn init(&mut self) -> Result<(), CatalogError> {
        if self.any_table_exists()? {
            return Err(CatalogError::AlreadyInitialized(self.path.clone()));
        }

        let tx = self.conn.transaction()?;
        tx.execute(
            "CREATE TABLE items (
                itemid INTEGER PRIMARY KEY NOT NULL,
                description TEXT,
                url TEXT NOT NULL
            )",
            [],
        )?;
        tx.execute(
            "CREATE TABLE tags (
                tagid INTEGER PRIMARY KEY NOT NULL,
                label TEXT NOT NULL
            )",
            [],
        )?;
        tx.execute(
            "CREATE TABLE itemtags (
                itemid INTEGER,
                tagid INTEGER,
                FOREIGN KEY(itemid) REFERENCES items(itemid),
                FOREIGN KEY(tagid) REFERENCES tags(tagid)
            )",
            [],
        )?;
        tx.execute("INSERT INTO tags (tagid, label) VALUES (0, 'gif')", [])?;
        tx.execute(
            "INSERT INTO items (itemid, description, url) VALUES (0, 'Dummy Item', '')",
            [],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Verify the schema exists before running a catalog operation
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotInitialized` if the schema is missing, or
    /// `CatalogError::Sqlite` if the check itself fails.
    pub fn ensure_initialized(&self) -> Result<(), CatalogError> {
        if self.any_table_exists()? {
            Ok(())
        } else {
            Err(CatalogError::NotInitialized(self.path.clone()))
        }
    }

    fn any_table_exists(&self) -> Result<bool, CatalogError> {
        let mut stmt = self
            .conn
            .prepare("SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)")?;
        for table in TABLES {
            if stmt.query_row([table], |row| row.get::<_, bool>(0))? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Exact-match lookup of a tag label's id
    ///
    /// If more than one tag record shares the label (possible since the
    /// schema does not enforce label uniqueness), a warning is written to
    /// stderr and the first match wins.
    ///
    /// # Returns
    /// * `Some(id)` for the first matching tag record
    /// * `None` if no tag has this label
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the query fails.
    pub fn tag_id(&self, label: &str) -> Result<Option<i64>, CatalogError> {
        Self::tag_id_on(&self.conn, label)
    }

    fn tag_id_on(conn: &Connection, label: &str) -> Result<Option<i64>, CatalogError> {
        let mut stmt = conn.prepare("SELECT tagid, label FROM tags WHERE label = ?1")?;
        let matches: Vec<Tag> = stmt
            .query_map([label], Tag::from_row)?
            .collect::<rusqlite::Result<_>>()?;

        if matches.len() > 1 {
            eprintln!("Warning: multiple ids found for tag label: {label}");
        }
        Ok(matches.first().map(|tag| tag.id))
    }

    /// Check if a tag label exists in the catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the lookup fails.
    pub fn tag_exists(&self, label: &str) -> Result<bool, CatalogError> {
        Ok(self.tag_id(label)?.is_some())
    }

    /// Insert a tag label, assigning the next free id
    ///
    /// # Returns
    /// * `Some(id)` with the newly assigned id
    /// * `None` if the label already exists (no-op; the existing id is kept)
    ///
    /// Ids are never reused, even across calls that turn out to be no-ops.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the insert fails.
    pub fn add_tag(&self, label: &str) -> Result<Option<i64>, CatalogError> {
        Self::add_tag_on(&self.conn, label)
    }

    fn add_tag_on(conn: &Connection, label: &str) -> Result<Option<i64>, CatalogError> {
        if Self::tag_id_on(conn, label)?.is_some() {
            return Ok(None);
        }

        let new_id: i64 =
            conn.query_row("SELECT COALESCE(MAX(tagid), -1) + 1 FROM tags", [], |row| {
                row.get(0)
            })?;
        conn.execute(
            "INSERT INTO tags (tagid, label) VALUES (?1, ?2)",
            params![new_id, label],
        )?;
        Ok(Some(new_id))
    }

    /// Get all tag labels in the catalog
    ///
    /// Labels come back in store iteration order; callers must not assume
    /// alphabetical or numeric ordering.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the query fails.
    pub fn list_tags(&self) -> Result<Vec<String>, CatalogError> {
        let mut stmt = self.conn.prepare("SELECT label FROM tags")?;
        let labels = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<_>>()?;
        Ok(labels)
    }

    /// Count the link rows carrying a tag label
    ///
    /// Includes duplicate links and links orphaned by `update_item`, so the
    /// count can exceed the number of items the label resolves to.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the query fails.
    pub fn tag_usage(&self, label: &str) -> Result<usize, CatalogError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM itemtags it JOIN tags t ON t.tagid = it.tagid WHERE t.label = ?1",
            [label],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Add a url with its tags and description
    ///
    /// Runs as one transaction: the duplicate-url guard, lazy tag creation,
    /// one link row per tag occurrence, and finally the item record itself.
    /// A repeated label in `tags` produces duplicate link rows.
    ///
    /// # Returns
    /// * `Some(id)` with the freshly assigned item id
    /// * `None` if an item with this exact url already exists (no-op)
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any statement fails; nothing is persisted in
    /// that case.
    pub fn add_item(
        &mut self,
        url: &str,
        tags: &[String],
        description: &str,
    ) -> Result<Option<i64>, CatalogError> {
        let tx = self.conn.transaction()?;
        let id = Self::add_item_on(&tx, url, tags, description, -1)?;
        tx.commit()?;
        Ok(id)
    }

    // `id_floor` keeps ids monotonic across a delete in the same transaction:
    // the new id is strictly greater than both the current maximum and the
    // floor recorded before the delete.
    fn add_item_on(
        conn: &Connection,
        url: &str,
        tags: &[String],
        description: &str,
        id_floor: i64,
    ) -> Result<Option<i64>, CatalogError> {
        let url_taken: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM items WHERE url = ?1)",
            [url],
            |row| row.get(0),
        )?;
        if url_taken {
            return Ok(None);
        }

        let max_id: i64 = conn.query_row(
            "SELECT COALESCE(MAX(itemid), -1) FROM items",
            [],
            |row| row.get(0),
        )?;
        let new_id = max_id.max(id_floor) + 1;

        for label in tags {
            Self::add_tag_on(conn, label)?;
        }
        for label in tags {
            // The label was just ensured above, so the lookup cannot miss
            if let Some(tag_id) = Self::tag_id_on(conn, label)? {
                conn.execute(
                    "INSERT INTO itemtags (itemid, tagid) VALUES (?1, ?2)",
                    params![new_id, tag_id],
                )?;
            }
        }

        conn.execute(
            "INSERT INTO items (itemid, description, url) VALUES (?1, ?2, ?3)",
            params![new_id, description, url],
        )?;
        Ok(Some(new_id))
    }

    /// Replace any existing items with this url, then add it afresh
    ///
    /// Runs as one transaction. The deleted items' link rows are left behind
    /// as orphans; only the new item's links are created. Because the delete
    /// clears the url first, the duplicate-url guard cannot fire and a fresh
    /// item id is always assigned (the old id is not reused).
    ///
    /// # Returns
    /// The same `Option<i64>` as [`Catalog::add_item`]; `Some` in practice.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any statement fails; nothing is persisted in
    /// that case.
    pub fn update_item(
        &mut self,
        url: &str,
        tags: &[String],
        description: &str,
    ) -> Result<Option<i64>, CatalogError> {
        let tx = self.conn.transaction()?;
        // Record the id ceiling before the delete so the outgoing item's id
        // is never handed back out
        let id_floor: i64 = tx.query_row(
            "SELECT COALESCE(MAX(itemid), -1) FROM items",
            [],
            |row| row.get(0),
        )?;
        tx.execute("DELETE FROM items WHERE url = ?1", [url])?;
        let id = Self::add_item_on(&tx, url, tags, description, id_floor)?;
        tx.commit()?;
        Ok(id)
    }

    /// Find all items tagged with every one of the given labels
    ///
    /// Intersection search: starts from the set of all item ids present in
    /// the link table, then intersects with the id set of each requested
    /// label. An unknown label contributes an empty set and collapses the
    /// whole result. With no labels the initial set is returned unfiltered.
    ///
    /// Ids whose item record is gone (orphaned links from `update_item`) are
    /// skipped when fetching. Result order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any query fails.
    pub fn search(&self, tags: &[String]) -> Result<Vec<Item>, CatalogError> {
        let mut stmt = self.conn.prepare("SELECT itemid FROM itemtags")?;
        let mut ids: HashSet<i64> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<_>>()?;

        let mut stmt = self.conn.prepare(
            "SELECT it.itemid FROM itemtags it JOIN tags t ON t.tagid = it.tagid WHERE t.label = ?1",
        )?;
        for label in tags {
            let tagged: HashSet<i64> = stmt
                .query_map([label], |row| row.get(0))?
                .collect::<rusqlite::Result<_>>()?;
            ids.retain(|id| tagged.contains(id));
        }

        let mut items = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(item) = self.item_by_id(id)? {
                items.push(item);
            }
        }
        Ok(items)
    }

    fn item_by_id(&self, id: i64) -> Result<Option<Item>, CatalogError> {
        let item = self
            .conn
            .query_row(
                "SELECT itemid, description, url FROM items WHERE itemid = ?1",
                [id],
                Item::from_row,
            )
            .optional()?;
        Ok(item)
    }

    /// Get all item records in the catalog, unordered
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the query fails.
    pub fn list_items(&self) -> Result<Vec<Item>, CatalogError> {
        let mut stmt = self
            .conn
            .prepare("SELECT itemid, description, url FROM items")?;
        let items = stmt
            .query_map([], Item::from_row)?
            .collect::<rusqlite::Result<_>>()?;
        Ok(items)
    }
}
