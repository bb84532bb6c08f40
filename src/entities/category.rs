// 🏷️ Category Value Type
//
// "A category IS its value" - two categories with the same name and kind
// are the same category, full stop.
//
// The DB's category registry consumes this type only through `==`; it makes
// no assumption about internal structure, ordering, or hashing. Keep this a
// plain value type: no UUID, no timestamps, no versioning. Identity fields
// would break duplicate detection by value.

use serde::{Deserialize, Serialize};

// ============================================================================
// CATEGORY KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    /// Expense category (money going out)
    Expense,

    /// Income category (money coming in)
    Income,

    /// Transfer between accounts (neutral)
    Transfer,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Expense => "Expense",
            CategoryKind::Income => "Income",
            CategoryKind::Transfer => "Transfer",
        }
    }
}

// ============================================================================
// CATEGORY VALUE
// ============================================================================

/// An equality-comparable category value tracked by the DB's registry.
///
/// Equality is structural: same `name` and same `kind` means equal.
/// The registry's uniqueness and existence checks rely on exactly this
/// relation and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name (e.g., "Legal", "Vendors", "Payroll")
    pub name: String,

    /// Kind of category (Expense, Income, Transfer)
    pub kind: CategoryKind,
}

impl Category {
    /// Create a new category value
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Category {
            name: name.into(),
            kind,
        }
    }

    /// Convenience constructor for expense categories (the common case)
    pub fn expense(name: impl Into<String>) -> Self {
        Category::new(name, CategoryKind::Expense)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.kind.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_value_equality() {
        let a = Category::new("Legal", CategoryKind::Expense);
        let b = Category::new("Legal", CategoryKind::Expense);

        // Same value, independently constructed
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_kind_distinguishes() {
        let expense = Category::new("Consulting", CategoryKind::Expense);
        let income = Category::new("Consulting", CategoryKind::Income);

        assert_ne!(expense, income);
    }

    #[test]
    fn test_category_name_distinguishes() {
        let legal = Category::expense("Legal");
        let vendors = Category::expense("Vendors");

        assert_ne!(legal, vendors);
    }

    #[test]
    fn test_category_display() {
        let category = Category::new("Payroll", CategoryKind::Expense);
        assert_eq!(category.to_string(), "Payroll (Expense)");
    }

    #[test]
    fn test_category_kind_as_str() {
        assert_eq!(CategoryKind::Expense.as_str(), "Expense");
        assert_eq!(CategoryKind::Income.as_str(), "Income");
        assert_eq!(CategoryKind::Transfer.as_str(), "Transfer");
    }
}
