use rust_decimal::Decimal;

/// Payment method recorded when a pending payment is quick-marked as paid.
pub const DEFAULT_PAYMENT_METHOD: &str = "Credit Card";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }

    pub fn all() -> &'static [PaymentStatus] {
        &[Self::Pending, Self::Paid]
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A vendor payment. Status only ever moves Pending -> Paid; the payment
/// date and method exist only once that transition has happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: Option<i64>,
    pub vendor: String,
    pub description: String,
    pub amount: Decimal,
    /// Format: "YYYY-MM-DD"
    pub due_date: String,
    pub status: PaymentStatus,
    pub payment_date: Option<String>,
    pub payment_method: Option<String>,
}

impl Payment {
    pub fn pending(vendor: String, description: String, amount: Decimal, due_date: String) -> Self {
        Self {
            id: None,
            vendor,
            description,
            amount,
            due_date,
            status: PaymentStatus::Pending,
            payment_date: None,
            payment_method: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }

    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }
}
