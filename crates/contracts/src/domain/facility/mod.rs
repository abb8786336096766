pub mod aggregate;
pub mod capacity;
pub mod pricing;

pub use aggregate::{Facility, FacilityContacts, FacilityId};
pub use capacity::{aggregate_capacities, Capacity, CapacitySummary};
pub use pricing::{Pricing, TimeSpan};
