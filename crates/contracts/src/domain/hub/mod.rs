pub mod aggregate;

pub use aggregate::{Hub, HubId};
