use serde::{Deserialize, Serialize};

/// Day class of a pricing row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    BusinessDay,
    Saturday,
    Sunday,
}

impl DayType {
    pub const ALL: [DayType; 3] = [DayType::BusinessDay, DayType::Saturday, DayType::Sunday];

    pub fn label(&self) -> &'static str {
        match self {
            DayType::BusinessDay => "Business day",
            DayType::Saturday => "Saturday",
            DayType::Sunday => "Sunday",
        }
    }

    /// Wire name as it appears in the JSON API
    pub fn wire_name(&self) -> &'static str {
        match self {
            DayType::BusinessDay => "BUSINESS_DAY",
            DayType::Saturday => "SATURDAY",
            DayType::Sunday => "SUNDAY",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.wire_name() == name)
    }
}
