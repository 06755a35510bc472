//! Linkr CLI application entry point
//!
//! This is the main executable for the linkr media-link catalog. It provides
//! a command-line interface for cataloging urls with tags and searching them
//! by tag intersection.
//!
//! # Usage
//!
//! ```bash
//! # Create the catalog file and schema
//! linkr init
//!
//! # Catalog a url
//! linkr add http://example.com/cat.gif cats funny
//!
//! # Replace an entry (old tag links are left behind by design)
//! linkr update http://example.com/cat.gif cats
//!
//! # Find items carrying all of the given tags
//! linkr search cats funny
//!
//! # List everything
//! linkr list items
//! linkr list tags
//!
//! # Quiet mode (only output results)
//! linkr -q search cats
//! ```
//!
//! The catalog lives in a single SQLite file, `links.db` in the current
//! directory unless overridden with `--db <PATH>`.

use linkr::{
    LinkrError,
    cli::{Cli, Commands},
    commands,
    db::Catalog,
};

type Result<T> = std::result::Result<T, LinkrError>;

/// Main entry point for the linkr application
///
/// Parses command-line arguments, opens the catalog, and dispatches to the
/// appropriate command module. Every command except `init` requires an
/// initialized catalog.
///
/// # Errors
///
/// Returns `LinkrError` on fatal failures: the catalog file cannot be
/// opened, the schema is missing or conflicting, or a statement fails.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let quiet = cli.quiet;

    let mut catalog = Catalog::open(&cli.db)?;

    if !matches!(cli.command, Commands::Init) {
        catalog.ensure_initialized()?;
    }

    match &cli.command {
        Commands::Init => commands::init(&mut catalog, quiet),
        Commands::Add { url, tags, description } => {
            commands::add(&mut catalog, url, tags, description.as_deref(), quiet)
        }
        Commands::Update { url, tags, description } => {
            commands::update(&mut catalog, url, tags, description.as_deref(), quiet)
        }
        Commands::Search { tags } => commands::search(&catalog, tags, quiet),
        Commands::List { variant } => commands::list(&catalog, *variant, quiet),
    }
}
