//! Add command - catalog a url with tags

use crate::{LinkrError, cli, db::Catalog};

type Result<T> = std::result::Result<T, LinkrError>;

/// Execute the add command
///
/// The duplicate-url case is a soft condition: a notice is printed and
/// nothing is persisted.
pub fn execute(
    catalog: &mut Catalog,
    url: &str,
    tags: &[String],
    description: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let description = cli::resolve_description(description, tags);

    match catalog.add_item(url, tags, &description)? {
        Some(id) => {
            if !quiet {
                println!("Added {url} (item {id}) with tags: {}", tags.join(", "));
            }
        }
        None => {
            if !quiet {
                println!("url already exists");
            }
        }
    }
    Ok(())
}
