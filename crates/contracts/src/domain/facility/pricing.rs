use crate::enums::{CapacityType, DayType, Usage};
use serde::{Deserialize, Serialize};

/// Opening span of a pricing row, "HH:mm" endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TimeSpan {
    pub from: Option<String>,
    pub until: Option<String>,
}

/// One entry in a facility's pricing schedule
///
/// Every field is optional: a freshly added row starts blank and the edit
/// form fills it in piecemeal. `Clone` is the deep copy used for cloning
/// rows in the editor and for snapshotting the save payload — the struct
/// owns all of its data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub capacity_type: Option<CapacityType>,
    pub usage: Option<Usage>,
    pub max_capacity: Option<u32>,
    pub day_type: Option<DayType>,
    #[serde(default)]
    pub time: TimeSpan,
    pub price: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_row_is_blank() {
        let row = Pricing::default();
        assert_eq!(row.capacity_type, None);
        assert_eq!(row.usage, None);
        assert_eq!(row.max_capacity, None);
        assert_eq!(row.day_type, None);
        assert_eq!(row.time, TimeSpan::default());
        assert_eq!(row.price, None);
    }

    #[test]
    fn clone_is_independent_of_the_original() {
        let original = Pricing {
            capacity_type: Some(CapacityType::Car),
            usage: Some(Usage::ParkAndRide),
            max_capacity: Some(50),
            day_type: Some(DayType::BusinessDay),
            time: TimeSpan {
                from: Some("7:00".to_string()),
                until: Some("18:00".to_string()),
            },
            price: Some("2,00".to_string()),
        };

        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.max_capacity = Some(10);
        copy.time.from = Some("9:00".to_string());
        copy.price = None;

        assert_eq!(original.max_capacity, Some(50));
        assert_eq!(original.time.from.as_deref(), Some("7:00"));
        assert_eq!(original.price.as_deref(), Some("2,00"));
    }
}
