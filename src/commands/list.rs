//! List command - list items or tags in the catalog

use crate::{LinkrError, cli::ListVariant, db::Catalog, output};

type Result<T> = std::result::Result<T, LinkrError>;

/// Execute the list command
pub fn execute(catalog: &Catalog, variant: ListVariant, quiet: bool) -> Result<()> {
    match variant {
        ListVariant::Items => list_items(catalog, quiet),
        ListVariant::Tags => list_tags(catalog, quiet),
    }
}

fn list_items(catalog: &Catalog, quiet: bool) -> Result<()> {
    let items = catalog.list_items()?;

    if items.is_empty() {
        if !quiet {
            println!("No items found in catalog.");
        }
    } else {
        if !quiet {
            println!("Items in catalog:");
        }
        for item in items {
            println!("{}", output::item_line(&item, quiet));
        }
    }
    Ok(())
}

fn list_tags(catalog: &Catalog, quiet: bool) -> Result<()> {
    let tags = catalog.list_tags()?;

    if tags.is_empty() {
        if !quiet {
            println!("No tags found in catalog.");
        }
    } else {
        if !quiet {
            println!("Tags in catalog:");
        }
        for label in tags {
            let count = catalog.tag_usage(&label)?;
            println!("{}", output::tag_with_count(&label, count, quiet));
        }
    }
    Ok(())
}
