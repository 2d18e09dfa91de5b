pub const MAX_RATING: u8 = 5;

/// A wedding vendor in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id: Option<i64>,
    pub name: String,
    pub category: String,
    /// Star rating, 0-5. New vendors start unrated at 0.
    pub rating: u8,
    pub description: String,
    pub is_favorite: bool,
    pub notes: String,
}

impl Vendor {
    pub fn new(name: String, category: String, description: String, notes: String) -> Self {
        Self {
            id: None,
            name,
            category,
            rating: 0,
            description,
            is_favorite: false,
            notes,
        }
    }

    /// Case-insensitive substring match against name and category, used by
    /// the live search box.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.category.to_lowercase().contains(&q)
    }

    /// Star-bar for list rendering, e.g. rating 3 -> "★★★☆☆".
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(MAX_RATING));
        let empty = usize::from(MAX_RATING) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
