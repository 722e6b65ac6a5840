//! Domain models and services for the toll parking facility

pub mod model;
pub mod service;

pub use model::{Money, SlotCapacity, Ticket};
pub use service::{Clock, ManualClock, Parking, PerHourPricing, PricingPolicy, SystemClock};
