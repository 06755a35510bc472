//! Update command - replace an existing url entry with fresh tags

use crate::{LinkrError, cli, db::Catalog};

type Result<T> = std::result::Result<T, LinkrError>;

/// Execute the update command
pub fn execute(
    catalog: &mut Catalog,
    url: &str,
    tags: &[String],
    description: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let description = cli::resolve_description(description, tags);

    match catalog.update_item(url, tags, &description)? {
        Some(id) => {
            if !quiet {
                println!("Updated {url} (item {id}) with tags: {}", tags.join(", "));
            }
        }
        // Unreachable in practice: the delete clears the url before the add
        None => {
            if !quiet {
                println!("url already exists");
            }
        }
    }
    Ok(())
}
