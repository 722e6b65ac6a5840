//! Vehicle categories served by the facility

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Parking class a slot (and the vehicle occupying it) belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VehicleCategory {
    /// Combustion-engine cars, no charger
    #[serde(rename = "standard")]
    Standard,
    /// Slots with a 20kW charger
    #[serde(rename = "electric_20kw")]
    Electric20kW,
    /// Slots with a 50kW charger
    #[serde(rename = "electric_50kw")]
    Electric50kW,
}

impl VehicleCategory {
    /// Every category, in slot-table order
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Standard,
        VehicleCategory::Electric20kW,
        VehicleCategory::Electric50kW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Standard => "standard",
            VehicleCategory::Electric20kW => "electric_20kw",
            VehicleCategory::Electric50kW => "electric_50kw",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "standard" | "fuel" => Ok(VehicleCategory::Standard),
            "electric-20kw" | "electric20kw" => Ok(VehicleCategory::Electric20kW),
            "electric-50kw" | "electric50kw" => Ok(VehicleCategory::Electric50kW),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}
