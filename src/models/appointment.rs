/// A scheduled meeting with a vendor (tasting, walkthrough, consultation).
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: Option<i64>,
    pub vendor: String,
    /// Appointment kind ("Food Tasting", "Venue Visit", ...).
    pub kind: String,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    /// Free-form time of day ("10:00 AM").
    pub time: String,
    pub notes: String,
}

impl Appointment {
    pub fn new(vendor: String, kind: String, date: String, time: String, notes: String) -> Self {
        Self {
            id: None,
            vendor,
            kind,
            date,
            time,
            notes,
        }
    }
}
