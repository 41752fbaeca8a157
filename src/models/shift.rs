use serde::Serialize;

/// A completed shift, written on clock-out (⇔ shifts row).
#[derive(Debug, Clone, Serialize)]
pub struct ShiftRecord {
    pub id: i64,
    pub clock_in: String,  // RFC 3339
    pub clock_out: String, // RFC 3339
    pub worked_seconds: i64,
    pub break_seconds: i64,
}

impl ShiftRecord {
    /// Time on shift minus the breaks taken.
    pub fn net_seconds(&self) -> i64 {
        (self.worked_seconds - self.break_seconds).max(0)
    }
}
