use crate::domain::common::AggregateId;
use crate::shared::MultilingualString;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Hub identifier, assigned by the server on first save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HubId(pub i64);

impl HubId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for HubId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(HubId::new)
            .map_err(|e| format!("Invalid hub id: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A named grouping of facilities reported in aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hub {
    pub id: Option<HubId>,
    pub name: MultilingualString,
    /// GeoJSON point marking the hub on the map
    pub location: Option<serde_json::Value>,
    #[serde(default)]
    pub facility_ids: Vec<i64>,
}

impl Hub {
    pub fn new() -> Self {
        Self {
            id: None,
            name: MultilingualString::default(),
            location: None,
            facility_ids: Vec::new(),
        }
    }

    pub fn to_string_id(&self) -> Option<String> {
        self.id.map(|id| id.as_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Name is required".into());
        }
        Ok(())
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_hub_is_unsaved_and_empty() {
        let hub = Hub::new();
        assert_eq!(hub.id, None);
        assert!(hub.facility_ids.is_empty());
        assert!(hub.validate().is_err());
    }

    #[test]
    fn named_hub_is_valid() {
        let mut hub = Hub::new();
        hub.name = MultilingualString::new("Itäkeskus");
        assert_eq!(hub.validate(), Ok(()));
    }
}
