//! Domain services

pub mod clock;
pub mod parking;
pub mod pricing;

pub use clock::{Clock, ManualClock, SystemClock};
pub use parking::Parking;
pub use pricing::{PerHourPricing, PricingPolicy};
