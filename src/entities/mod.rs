// Entity Models
//
// The value types the DB stores:
// - Category: plain value, structural equality, consumed by the registry
// - Contract: record entity with stable UUID identity, stored untouched

pub mod category;
pub mod contract;

pub use category::{Category, CategoryKind};
pub use contract::{Contract, ContractStatus};
