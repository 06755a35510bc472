//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for linkr using the `clap`
//! crate. It carries no catalog logic: parsing resolves a command plus its
//! `{url, tags, description}` arguments, and the command modules do the rest.
//!
//! # Commands
//!
//! - **init**: Create the catalog schema and seed records
//! - **add**: Catalog a url with one or more tags
//! - **update**: Replace an existing url entry with fresh tags
//! - **search**: Find items tagged with all of the given tags
//! - **list**: List items or tags
//!
//! # Design Features
//!
//! - Global `--db` flag selecting the catalog file (defaults to `links.db`)
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (e.g. `a` for `add`, `s` for `search`)

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// List variant for the list command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListVariant {
    /// List all items in the catalog
    Items,
    /// List all tags in the catalog
    Tags,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "linkr")]
#[command(about = "A tag-based catalog for media links", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the catalog file
    #[arg(long = "db", value_name = "PATH", global = true, default_value = "links.db")]
    pub db: PathBuf,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize the catalog schema and seed records
    Init,

    /// Catalog a url with one or more tags
    #[command(visible_alias = "a")]
    Add {
        /// Url to catalog
        #[arg(value_name = "URL")]
        url: String,

        /// Tags to apply
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,

        /// Free-text description (defaults to the tags joined by spaces)
        #[arg(short = 'd', long = "description", value_name = "DESC")]
        description: Option<String>,
    },

    /// Replace an existing url entry with fresh tags
    #[command(visible_alias = "u")]
    Update {
        /// Url to replace
        #[arg(value_name = "URL")]
        url: String,

        /// Tags to apply to the replacement
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,

        /// Free-text description (defaults to the tags joined by spaces)
        #[arg(short = 'd', long = "description", value_name = "DESC")]
        description: Option<String>,
    },

    /// Find items tagged with all of the given tags
    #[command(visible_alias = "s")]
    Search {
        /// Tags that every match must carry
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// List items or tags in the catalog
    #[command(visible_alias = "l")]
    List {
        /// What to list (items or tags)
        variant: ListVariant,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Resolve the description for add/update: an explicit flag wins, otherwise
/// the tags joined by spaces
#[must_use]
pub fn resolve_description(description: Option<&str>, tags: &[String]) -> String {
    description
        .map(str::to_string)
        .unwrap_or_else(|| tags.join(" "))
}
