// 🗄️ DB - In-memory record-keeping store
//
// Owns the category registry (the only part with decision logic), the
// contract storage, and the notifier email address. The registry enforces
// two invariants over the category collection:
// - uniqueness: no two stored categories are ever equal
// - append order: the collection is exactly the successful add calls in
//   call order, minus removed elements
//
// Every operation takes &mut self so mutation is visible to the caller.
// The store does no locking; a caller sharing a DB across threads wraps it
// in its own Mutex/RwLock.

use serde::{Deserialize, Serialize};

use crate::entities::{Category, Contract};

// ============================================================================
// ERRORS
// ============================================================================

/// A failed registry operation. Both variants are precondition violations
/// on the collection; the store is left unmodified in either case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    /// `add_category` found an equal category already present
    DuplicateCategory { name: String },

    /// `remove_category` found no equal category
    CategoryNotFound { name: String },
}

impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbError::DuplicateCategory { name } => {
                write!(f, "Category already exists: {}", name)
            }
            DbError::CategoryNotFound { name } => {
                write!(f, "Category to remove does not exist: {}", name)
            }
        }
    }
}

impl std::error::Error for DbError {}

// ============================================================================
// DB STORE
// ============================================================================

/// The in-memory store: ordered unique categories, contract records, and
/// a single notification email address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DB {
    /// Registry categories, insertion order significant, no duplicates
    categories: Vec<Category>,

    /// Contract records, plain append-order storage
    contracts: Vec<Contract>,

    /// Address notified about stored contracts; empty until configured.
    /// No validation here - the notification dispatcher owns that.
    notifier_email: String,
}

impl DB {
    /// Create an empty store (no categories, no contracts, empty email)
    pub fn new() -> Self {
        DB::default()
    }

    // ========================================================================
    // CATEGORY REGISTRY
    // ========================================================================

    /// Add a category to the registry.
    ///
    /// Scans the existing collection for an equal element first; if one is
    /// present the call fails with `DuplicateCategory` and the collection is
    /// untouched. Otherwise the category is appended at the tail, preserving
    /// the order of everything already stored.
    pub fn add_category(&mut self, category: Category) -> Result<(), DbError> {
        if self.categories.iter().any(|existing| *existing == category) {
            return Err(DbError::DuplicateCategory {
                name: category.name,
            });
        }

        self.categories.push(category);
        Ok(())
    }

    /// Remove the category equal to `category` from the registry.
    ///
    /// Linear scan from the front; the first equal element is excised in
    /// place and the relative order of the rest is preserved. Fails with
    /// `CategoryNotFound`, mutating nothing, when no element is equal.
    pub fn remove_category(&mut self, category: &Category) -> Result<(), DbError> {
        match self.categories.iter().position(|existing| existing == category) {
            Some(index) => {
                self.categories.remove(index);
                Ok(())
            }
            None => Err(DbError::CategoryNotFound {
                name: category.name.clone(),
            }),
        }
    }

    /// Membership test: is an equal category currently registered?
    pub fn contains_category(&self, category: &Category) -> bool {
        self.categories.iter().any(|existing| existing == category)
    }

    /// All registered categories, in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of registered categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    // ========================================================================
    // CONTRACT STORAGE
    // ========================================================================

    /// Append a contract record. Contracts carry their own UUID identity,
    /// so the store applies no uniqueness rule here.
    pub fn add_contract(&mut self, contract: Contract) {
        self.contracts.push(contract);
    }

    /// All stored contracts, in insertion order
    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    // ========================================================================
    // NOTIFIER EMAIL
    // ========================================================================

    /// The configured notification address (empty string until set)
    pub fn notifier_email(&self) -> &str {
        &self.notifier_email
    }

    /// Set the notification address
    pub fn set_notifier_email(&mut self, email: impl Into<String>) {
        self.notifier_email = email.into();
    }
}

// ============================================================================
// TESTS
// ============================================================================
