use crate::domain::common::AggregateId;
use crate::domain::facility::capacity::Capacity;
use crate::domain::facility::pricing::Pricing;
use crate::enums::{CapacityType, FacilityStatus};
use crate::shared::MultilingualString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// ID Type
// ============================================================================

/// Facility identifier, assigned by the server on first save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacilityId(pub i64);

impl FacilityId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for FacilityId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(FacilityId::new)
            .map_err(|e| format!("Invalid facility id: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A parking facility with capacities by type and a pricing schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: Option<FacilityId>,
    pub name: MultilingualString,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub operator_id: Option<i64>,
    #[serde(default)]
    pub status: FacilityStatus,
    /// End of a temporary closure or exceptional situation, if known
    pub status_until: Option<chrono::NaiveDate>,
    /// GeoJSON polygon, rendered and edited by the map collaborator
    pub location: Option<serde_json::Value>,
    #[serde(default)]
    pub capacities: BTreeMap<CapacityType, Capacity>,
    #[serde(default)]
    pub pricing: Vec<Pricing>,
    #[serde(default)]
    pub services: Vec<i64>,
    #[serde(default)]
    pub payment_methods: Vec<i64>,
    #[serde(default)]
    pub contacts: FacilityContacts,
}

/// Contact references of a facility (contact ids)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FacilityContacts {
    pub emergency: Option<i64>,
    pub operator: Option<i64>,
    pub service: Option<i64>,
}

impl Facility {
    /// Empty draft for the create form
    pub fn new() -> Self {
        Self {
            id: None,
            name: MultilingualString::default(),
            aliases: Vec::new(),
            operator_id: None,
            status: FacilityStatus::default(),
            status_until: None,
            location: None,
            capacities: BTreeMap::new(),
            pricing: Vec::new(),
            services: Vec::new(),
            payment_methods: Vec::new(),
            contacts: FacilityContacts::default(),
        }
    }

    pub fn to_string_id(&self) -> Option<String> {
        self.id.map(|id| id.as_string())
    }

    /// Aliases as rendered on the facility view
    pub fn aliases_text(&self) -> String {
        self.aliases.join(", ")
    }

    /// Built spaces over all capacity types
    pub fn total_built(&self) -> u32 {
        self.capacities.values().map(|c| c.built).sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Name is required".into());
        }
        if self.operator_id.is_none() {
            return Err("Operator is required".into());
        }
        if self.location.is_none() {
            return Err("Location is required".into());
        }
        Ok(())
    }
}

impl Default for Facility {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_facility() -> Facility {
        let mut facility = Facility::new();
        facility.name = MultilingualString::new("Central Garage");
        facility.operator_id = Some(42);
        facility.location = Some(serde_json::json!({
            "type": "Polygon",
            "coordinates": [[[24.9, 60.1], [25.0, 60.1], [25.0, 60.2], [24.9, 60.1]]],
        }));
        facility
    }

    #[test]
    fn new_facility_has_no_id_and_default_status() {
        let facility = Facility::new();
        assert_eq!(facility.id, None);
        assert_eq!(facility.status, FacilityStatus::InOperation);
        assert!(facility.pricing.is_empty());
    }

    #[test]
    fn validate_accepts_a_complete_facility() {
        assert_eq!(valid_facility().validate(), Ok(()));
    }

    #[test]
    fn validate_requires_name_operator_and_location() {
        let mut facility = valid_facility();
        facility.name = MultilingualString::default();
        assert!(facility.validate().is_err());

        let mut facility = valid_facility();
        facility.operator_id = None;
        assert!(facility.validate().is_err());

        let mut facility = valid_facility();
        facility.location = None;
        assert!(facility.validate().is_err());
    }

    #[test]
    fn aliases_render_comma_joined() {
        let mut facility = valid_facility();
        facility.aliases = vec!["CG".to_string(), "Keskuspysäköinti".to_string()];
        assert_eq!(facility.aliases_text(), "CG, Keskuspysäköinti");

        facility.aliases.clear();
        assert_eq!(facility.aliases_text(), "");
    }

    #[test]
    fn total_built_sums_over_types() {
        let mut facility = valid_facility();
        facility.capacities.insert(
            CapacityType::Car,
            Capacity {
                built: 100,
                ..Capacity::default()
            },
        );
        facility.capacities.insert(
            CapacityType::Bicycle,
            Capacity {
                built: 30,
                ..Capacity::default()
            },
        );
        assert_eq!(facility.total_built(), 130);
    }

    #[test]
    fn facility_id_parses_route_params() {
        assert_eq!(FacilityId::from_string("123"), Ok(FacilityId(123)));
        assert!(FacilityId::from_string("abc").is_err());
    }
}
