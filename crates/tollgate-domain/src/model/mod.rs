//! Domain model types

pub mod money;
pub mod slot_capacity;
pub mod ticket;

pub use money::Money;
pub use slot_capacity::{SlotCapacity, SlotOccupancy};
pub use ticket::Ticket;
