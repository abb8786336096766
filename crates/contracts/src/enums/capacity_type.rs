use serde::{Deserialize, Serialize};

/// Parking capacity categories
///
/// The set is fixed domain vocabulary; iteration always goes through
/// [`CapacityType::ALL`] so list and table order is stable everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapacityType {
    Car,
    Disabled,
    ElectricCar,
    Motorcycle,
    Bicycle,
    BicycleSecureSpace,
}

impl CapacityType {
    pub const ALL: [CapacityType; 6] = [
        CapacityType::Car,
        CapacityType::Disabled,
        CapacityType::ElectricCar,
        CapacityType::Motorcycle,
        CapacityType::Bicycle,
        CapacityType::BicycleSecureSpace,
    ];

    /// Wire name as it appears in the JSON API
    pub fn wire_name(&self) -> &'static str {
        match self {
            CapacityType::Car => "CAR",
            CapacityType::Disabled => "DISABLED",
            CapacityType::ElectricCar => "ELECTRIC_CAR",
            CapacityType::Motorcycle => "MOTORCYCLE",
            CapacityType::Bicycle => "BICYCLE",
            CapacityType::BicycleSecureSpace => "BICYCLE_SECURE_SPACE",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            CapacityType::Car => "Car",
            CapacityType::Disabled => "Disabled person's car",
            CapacityType::ElectricCar => "Electric car",
            CapacityType::Motorcycle => "Motorcycle",
            CapacityType::Bicycle => "Bicycle",
            CapacityType::BicycleSecureSpace => "Bicycle, secure space",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ct| ct.wire_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for ct in CapacityType::ALL {
            assert_eq!(CapacityType::from_wire_name(ct.wire_name()), Some(ct));
        }
        assert_eq!(CapacityType::from_wire_name("TRUCK"), None);
    }

    #[test]
    fn serializes_to_wire_name() {
        let json = serde_json::to_string(&CapacityType::ElectricCar).unwrap();
        assert_eq!(json, "\"ELECTRIC_CAR\"");
    }
}
