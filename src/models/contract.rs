/// A signed vendor contract. The expiration date may be left empty while a
/// renewal is being negotiated; an empty or unparseable date simply never
/// shows up in the expiring-soon window.
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub id: Option<i64>,
    pub vendor: String,
    /// Contract kind ("Venue", "Catering", ...).
    pub kind: String,
    /// Format: "YYYY-MM-DD"
    pub signed_date: String,
    /// Format: "YYYY-MM-DD"; empty when no expiration has been set.
    pub expiration_date: String,
    pub file_name: String,
}

impl Contract {
    pub fn new(
        vendor: String,
        kind: String,
        signed_date: String,
        expiration_date: String,
        file_name: String,
    ) -> Self {
        Self {
            id: None,
            vendor,
            kind,
            signed_date,
            expiration_date,
            file_name,
        }
    }
}
