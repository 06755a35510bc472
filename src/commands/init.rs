//! Init command - create the catalog schema and seed records

use crate::{LinkrError, db::Catalog};

type Result<T> = std::result::Result<T, LinkrError>;

/// Execute the init command
pub fn execute(catalog: &mut Catalog, quiet: bool) -> Result<()> {
    catalog.init()?;
    if !quiet {
        println!("Initialized catalog successfully");
    }
    Ok(())
}
