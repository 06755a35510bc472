//! Search command - find items by tag intersection

use crate::{LinkrError, db::Catalog, output};

type Result<T> = std::result::Result<T, LinkrError>;

/// Execute the search command
pub fn execute(catalog: &Catalog, tags: &[String], quiet: bool) -> Result<()> {
    let items = catalog.search(tags)?;

    if items.is_empty() {
        if !quiet {
            println!("No items found matching tags: {}", tags.join(", "));
        }
    } else {
        if !quiet {
            println!("Found {} item(s) matching tags [{}]:", items.len(), tags.join(", "));
        }
        for item in items {
            println!("{}", output::item_line(&item, quiet));
        }
    }
    Ok(())
}
