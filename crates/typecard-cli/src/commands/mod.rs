//! Command implementations for the typecard CLI

pub mod completions;
pub mod kinds;
pub mod literal;
pub mod show;
pub mod storage;

// Re-export command functions
pub use completions::completions_command;
pub use kinds::kinds_command;
pub use literal::literal_command;
pub use show::show_command;
pub use storage::storage_command;
