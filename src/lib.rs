// Contract Keeper - Core Library
// In-memory record-keeping store for contracts and their categories

pub mod db;
pub mod entities;

// Re-export commonly used types
pub use db::{DbError, DB};
pub use entities::{Category, CategoryKind, Contract, ContractStatus};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
