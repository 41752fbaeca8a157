use serde::{Deserialize, Serialize};

/// Kind of pause taken during an open shift.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BreakType {
    Lunch,
    Short,
}

impl BreakType {
    /// Parse user input (case-insensitive).
    pub fn bt_from_str(s: &str) -> Option<Self> {
        Self::from_store_str(&s.trim().to_lowercase())
    }

    pub fn bt_as_str(&self) -> &'static str {
        match self {
            BreakType::Lunch => "lunch",
            BreakType::Short => "short",
        }
    }

    /// Convert enum → persisted `breakType` value
    pub fn to_store_str(&self) -> &'static str {
        self.bt_as_str()
    }

    /// Convert persisted `breakType` value → enum
    pub fn from_store_str(s: &str) -> Option<Self> {
        match s {
            "lunch" => Some(BreakType::Lunch),
            "short" => Some(BreakType::Short),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BreakType::Lunch => "Lunch break",
            BreakType::Short => "Short break",
        }
    }
}
