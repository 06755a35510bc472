//! Output formatting for CLI display
//!
//! This module provides utilities for formatting catalog records in the CLI,
//! including item lines and tag usage lines.

use crate::db::Item;
use colored::Colorize;

/// Format an item for display
#[must_use]
pub fn item_line(item: &Item, quiet: bool) -> String {
    if quiet {
        item.url.clone()
    } else if item.description.is_empty() {
        format!("  {}: {}", item.id, item.url.cyan())
    } else {
        format!("  {}: {} ({})", item.id, item.url.cyan(), item.description)
    }
}

/// Format a tag with its link usage count
#[must_use]
pub fn tag_with_count(label: &str, count: usize, quiet: bool) -> String {
    if quiet {
        label.to_string()
    } else {
        format!("  {label} (used by {count} item(s))")
    }
}
