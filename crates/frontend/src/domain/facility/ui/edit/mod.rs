//! Facility edit form
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch, save, reference data)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)
//! - pricing_rows.rs: pricing schedule editing state

mod model;
pub mod pricing_rows;
mod view;
mod view_model;

pub use view::FacilityEdit;
pub use view_model::FacilityEditViewModel;
