pub mod capacity_type;
pub mod day_type;
pub mod facility_status;
pub mod usage;

pub use capacity_type::CapacityType;
pub use day_type::DayType;
pub use facility_status::FacilityStatus;
pub use usage::Usage;
