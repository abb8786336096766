use serde::{Deserialize, Serialize};

/// Operational status of a facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacilityStatus {
    #[default]
    InOperation,
    ExceptionalSituation,
    TemporarilyClosed,
    Inactive,
}

impl FacilityStatus {
    pub const ALL: [FacilityStatus; 4] = [
        FacilityStatus::InOperation,
        FacilityStatus::ExceptionalSituation,
        FacilityStatus::TemporarilyClosed,
        FacilityStatus::Inactive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FacilityStatus::InOperation => "In operation",
            FacilityStatus::ExceptionalSituation => "Exceptional situation",
            FacilityStatus::TemporarilyClosed => "Temporarily closed",
            FacilityStatus::Inactive => "Inactive",
        }
    }

    /// Wire name as it appears in the JSON API
    pub fn wire_name(&self) -> &'static str {
        match self {
            FacilityStatus::InOperation => "IN_OPERATION",
            FacilityStatus::ExceptionalSituation => "EXCEPTIONAL_SITUATION",
            FacilityStatus::TemporarilyClosed => "TEMPORARILY_CLOSED",
            FacilityStatus::Inactive => "INACTIVE",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.wire_name() == name)
    }
}
