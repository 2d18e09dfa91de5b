use rust_decimal::Decimal;

/// A single ledger entry. Expenses reference their category by name rather
/// than by id, so an expense can outlive a rename without breaking — and a
/// typo'd name simply fails to match any bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: Option<i64>,
    /// Category name, not id.
    pub category: String,
    pub vendor: String,
    pub description: String,
    pub amount: Decimal,
    /// Format: "YYYY-MM-DD"
    pub date: String,
}

impl Expense {
    pub fn new(
        category: String,
        vendor: String,
        description: String,
        amount: Decimal,
        date: String,
    ) -> Self {
        Self {
            id: None,
            category,
            vendor,
            description,
            amount,
            date,
        }
    }
}
