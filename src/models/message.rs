#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Vendor,
}

/// One entry in a vendor conversation. Vendor-side messages are seed data
/// only; there is no reply simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Sequential within its thread.
    pub id: i64,
    pub sender: Sender,
    pub text: String,
    /// Local timestamp, format: "YYYY-MM-DDTHH:MM:SS"
    pub timestamp: String,
}

impl Message {
    /// Clock-face portion of the timestamp ("14:35"), for compact display.
    pub fn time_of_day(&self) -> &str {
        match self.timestamp.split_once('T') {
            Some((_, time)) => time.get(..5).unwrap_or(time),
            None => &self.timestamp,
        }
    }
}
