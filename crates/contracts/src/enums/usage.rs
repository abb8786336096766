use serde::{Deserialize, Serialize};

/// Usage class of a pricing row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Usage {
    ParkAndRide,
    HslTravelCard,
    Commercial,
    Disc,
}

impl Usage {
    pub const ALL: [Usage; 4] = [
        Usage::ParkAndRide,
        Usage::HslTravelCard,
        Usage::Commercial,
        Usage::Disc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Usage::ParkAndRide => "Park and ride",
            Usage::HslTravelCard => "HSL travel card",
            Usage::Commercial => "Commercial",
            Usage::Disc => "Parking disc",
        }
    }

    /// Wire name as it appears in the JSON API
    pub fn wire_name(&self) -> &'static str {
        match self {
            Usage::ParkAndRide => "PARK_AND_RIDE",
            Usage::HslTravelCard => "HSL_TRAVEL_CARD",
            Usage::Commercial => "COMMERCIAL",
            Usage::Disc => "DISC",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.wire_name() == name)
    }
}
