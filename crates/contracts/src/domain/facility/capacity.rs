use crate::enums::CapacityType;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Capacity counts for one capacity type
///
/// The sub-field set is closed; renderers iterate [`Capacity::FIELDS`]
/// instead of reflecting over the struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Capacity {
    pub built: u32,
    pub unknown: u32,
    pub available: u32,
}

impl Capacity {
    pub const FIELDS: [&'static str; 3] = ["built", "unknown", "available"];

    pub fn field(&self, name: &str) -> u32 {
        match name {
            "built" => self.built,
            "unknown" => self.unknown,
            "available" => self.available,
            _ => 0,
        }
    }

    /// Field-wise addition
    pub fn add(&mut self, other: &Capacity) {
        self.built += other.built;
        self.unknown += other.unknown;
        self.available += other.available;
    }
}

/// Capacities of one or more facilities, accumulated per capacity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CapacitySummary(pub BTreeMap<CapacityType, Capacity>);

impl CapacitySummary {
    /// Accumulate another capacity map into this summary.
    ///
    /// The summary's own key set is the output shape: entries of `other`
    /// under types the summary does not already carry are ignored, and
    /// types missing from `other` contribute nothing.
    pub fn merge(&mut self, other: &BTreeMap<CapacityType, Capacity>) {
        for (capacity_type, capacity) in self.0.iter_mut() {
            if let Some(addend) = other.get(capacity_type) {
                capacity.add(addend);
            }
        }
    }

    pub fn get(&self, capacity_type: CapacityType) -> Option<&Capacity> {
        self.0.get(&capacity_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CapacityType, &Capacity)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fold capacity maps into one summary.
///
/// The first map seeds the accumulator, so its key set defines the output
/// shape. Zero inputs have no seed and are rejected.
pub fn aggregate_capacities<'a, I>(capacity_maps: I) -> Result<CapacitySummary>
where
    I: IntoIterator<Item = &'a BTreeMap<CapacityType, Capacity>>,
{
    let mut iter = capacity_maps.into_iter();
    let Some(first) = iter.next() else {
        bail!("cannot aggregate capacities of zero facilities");
    };

    let mut summary = CapacitySummary(first.clone());
    for capacities in iter {
        summary.merge(capacities);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(n: u32) -> Capacity {
        Capacity {
            built: n,
            ..Capacity::default()
        }
    }

    #[test]
    fn single_input_is_returned_as_is() {
        let mut caps = BTreeMap::new();
        caps.insert(CapacityType::Car, built(10));
        caps.insert(CapacityType::Bicycle, built(20));

        let summary = aggregate_capacities([&caps]).unwrap();
        assert_eq!(summary.0, caps);
    }

    #[test]
    fn overlapping_types_sum_field_wise() {
        let mut a = BTreeMap::new();
        a.insert(
            CapacityType::Car,
            Capacity {
                built: 10,
                unknown: 1,
                available: 4,
            },
        );
        let mut b = BTreeMap::new();
        b.insert(
            CapacityType::Car,
            Capacity {
                built: 7,
                unknown: 2,
                available: 3,
            },
        );

        let summary = aggregate_capacities([&a, &b]).unwrap();
        assert_eq!(
            summary.get(CapacityType::Car),
            Some(&Capacity {
                built: 17,
                unknown: 3,
                available: 7,
            })
        );
    }

    #[test]
    fn first_input_defines_the_output_shape() {
        let mut a = BTreeMap::new();
        a.insert(CapacityType::Car, built(10));
        let mut b = BTreeMap::new();
        b.insert(CapacityType::Car, built(5));
        b.insert(CapacityType::Motorcycle, built(3));

        let summary = aggregate_capacities([&a, &b]).unwrap();
        assert_eq!(summary.get(CapacityType::Car), Some(&built(15)));
        assert_eq!(summary.get(CapacityType::Motorcycle), None);
    }

    #[test]
    fn types_missing_from_later_inputs_contribute_nothing() {
        let mut a = BTreeMap::new();
        a.insert(CapacityType::Car, built(10));
        a.insert(CapacityType::Bicycle, built(20));
        let mut b = BTreeMap::new();
        b.insert(CapacityType::Car, built(5));

        let summary = aggregate_capacities([&a, &b]).unwrap();
        assert_eq!(summary.get(CapacityType::Car), Some(&built(15)));
        assert_eq!(summary.get(CapacityType::Bicycle), Some(&built(20)));
    }

    #[test]
    fn zero_inputs_is_an_error() {
        let none: [&BTreeMap<CapacityType, Capacity>; 0] = [];
        assert!(aggregate_capacities(none).is_err());
    }

    #[test]
    fn field_lookup_matches_struct_fields() {
        let capacity = Capacity {
            built: 1,
            unknown: 2,
            available: 3,
        };
        assert_eq!(
            Capacity::FIELDS.map(|f| capacity.field(f)),
            [1, 2, 3]
        );
    }
}
