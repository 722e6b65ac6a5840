//! Per-category slot occupancy counters

use serde::{Deserialize, Serialize};
use tollgate_types::VehicleCategory;

/// Maximum and current occupancy of one category's slots
///
/// Bounds are enforced by `Parking`, which refuses an admission before
/// incrementing; the counter itself does not check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCapacity {
    maximum: u32,
    occupied: u32,
}

impl SlotCapacity {
    pub fn new(maximum: u32) -> Self {
        Self {
            maximum,
            occupied: 0,
        }
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    /// Free slots left
    pub fn available(&self) -> u32 {
        self.maximum.saturating_sub(self.occupied)
    }

    pub fn is_full(&self) -> bool {
        self.occupied >= self.maximum
    }

    pub(crate) fn increment(&mut self) {
        self.occupied += 1;
    }

    pub(crate) fn decrement(&mut self) {
        self.occupied = self.occupied.saturating_sub(1);
    }
}

/// Snapshot row of the slot table, for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOccupancy {
    pub category: VehicleCategory,
    pub maximum: u32,
    pub occupied: u32,
}
