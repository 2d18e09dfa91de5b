use rust_decimal::Decimal;

use super::category::{percentage_of, Category};

/// Derived budget totals. `spent` is the sum of per-category spend and
/// `remaining` is `total - spent`; neither is stored anywhere, so the
/// summary can never drift from the category list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub total: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
}

impl BudgetSummary {
    pub fn derive(total: Decimal, categories: &[Category]) -> Self {
        let spent: Decimal = categories.iter().map(|c| c.spent).sum();
        Self {
            total,
            spent,
            remaining: total - spent,
        }
    }

    pub fn spent_percentage(&self) -> i64 {
        percentage_of(self.spent, self.total)
    }
}
