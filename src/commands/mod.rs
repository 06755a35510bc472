//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and executes the operation against the catalog.

pub mod add;
pub mod init;
pub mod list;
pub mod search;
pub mod update;

// Re-export execute functions for convenience
pub use add::execute as add;
pub use init::execute as init;
pub use list::execute as list;
pub use search::execute as search;
pub use update::execute as update;
