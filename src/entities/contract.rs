// 📄 Contract Record Entity
//
// A contract record held by the DB's storage. None of the registry
// operations inspect it; the store keeps contracts so a host application
// can associate them with registry categories (by name) and notify the
// configured email address about them.
//
// Identity: UUID string id (never changes)
// Values: title, counterparty, status, dates, metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// CONTRACT STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    /// Drafted, not yet signed
    Draft,

    /// Signed and in effect
    Active,

    /// Past its end date
    Expired,

    /// Ended early by either party
    Terminated,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Draft => "Draft",
            ContractStatus::Active => "Active",
            ContractStatus::Expired => "Expired",
            ContractStatus::Terminated => "Terminated",
        }
    }
}

// ============================================================================
// CONTRACT ENTITY
// ============================================================================

/// A contract record stored by the DB.
///
/// Equality is structural over all fields (id included), so independently
/// created contracts never compare equal while clones of the same record do.
/// The DB applies no uniqueness rule to contracts; they are plain storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Stable identity (UUID) - never changes
    pub id: String,

    /// Contract title (e.g., "Office Lease 2026")
    pub title: String,

    /// The other party to the contract
    pub counterparty: String,

    /// Name of a registry category this contract files under, if any
    pub category: Option<String>,

    /// Current lifecycle status
    pub status: ContractStatus,

    /// When the contract was signed (None while Draft)
    pub signed_at: Option<DateTime<Utc>>,

    /// When this record entered the store
    pub created_at: DateTime<Utc>,

    /// Extensible metadata (host-defined; grows without schema changes)
    pub metadata: serde_json::Value,
}

impl Contract {
    /// Create a new draft contract with a fresh UUID
    pub fn new(title: impl Into<String>, counterparty: impl Into<String>) -> Self {
        Contract {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            counterparty: counterparty.into(),
            category: None,
            status: ContractStatus::Draft,
            signed_at: None,
            created_at: Utc::now(),
            metadata: serde_json::json!({}),
        }
    }

    /// Create a contract filed under a category name
    pub fn with_category(
        title: impl Into<String>,
        counterparty: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let mut contract = Self::new(title, counterparty);
        contract.category = Some(category.into());
        contract
    }

    /// Mark the contract signed as of now
    pub fn sign(&mut self) {
        self.status = ContractStatus::Active;
        self.signed_at = Some(Utc::now());
    }

    /// Check whether the contract is currently in effect
    pub fn is_active(&self) -> bool {
        self.status == ContractStatus::Active
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_creation() {
        let contract = Contract::new("Office Lease 2026", "Acme Properties");

        assert!(!contract.id.is_empty());
        assert_eq!(contract.title, "Office Lease 2026");
        assert_eq!(contract.counterparty, "Acme Properties");
        assert_eq!(contract.category, None);
        assert_eq!(contract.status, ContractStatus::Draft);
        assert!(contract.signed_at.is_none());
        assert_eq!(contract.metadata, serde_json::json!({}));
    }

    #[test]
    fn test_contract_with_category() {
        let contract = Contract::with_category("SaaS Subscription", "Initech", "Vendors");

        assert_eq!(contract.category, Some("Vendors".to_string()));
    }

    #[test]
    fn test_contract_sign() {
        let mut contract = Contract::new("Consulting Agreement", "Globex");
        assert!(!contract.is_active());

        contract.sign();

        assert!(contract.is_active());
        assert_eq!(contract.status, ContractStatus::Active);
        assert!(contract.signed_at.is_some());
    }

    #[test]
    fn test_contract_identity_distinguishes() {
        // Same values, different UUIDs: not equal
        let a = Contract::new("NDA", "Globex");
        let b = Contract::new("NDA", "Globex");
        assert_ne!(a, b);

        // A clone is the same record
        let c = a.clone();
        assert_eq!(a, c);
    }

    #[test]
    fn test_contract_status_as_str() {
        assert_eq!(ContractStatus::Draft.as_str(), "Draft");
        assert_eq!(ContractStatus::Active.as_str(), "Active");
        assert_eq!(ContractStatus::Expired.as_str(), "Expired");
        assert_eq!(ContractStatus::Terminated.as_str(), "Terminated");
    }
}
