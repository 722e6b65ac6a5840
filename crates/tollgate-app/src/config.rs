//! Facility configuration
//!
//! Config stored at: ~/.config/tollgate/config.toml

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tollgate_domain::{Parking, PerHourPricing, PricingPolicy};
use tollgate_types::{ConfigError, Error, Result, VehicleCategory};

/// Facility configuration: slot counts and tariff
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub capacity: CapacityConfig,

    #[serde(default)]
    pub pricing: PricingConfig,
}

/// Slot counts per vehicle category
///
/// Signed so that a negative value in the file reaches `Parking` and is
/// reported as an invalid capacity instead of a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityConfig {
    #[serde(default = "default_standard_slots")]
    pub standard: i32,

    #[serde(default = "default_electric_slots")]
    pub electric_20kw: i32,

    #[serde(default = "default_electric_slots")]
    pub electric_50kw: i32,
}

fn default_standard_slots() -> i32 {
    10
}

fn default_electric_slots() -> i32 {
    2
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            standard: default_standard_slots(),
            electric_20kw: default_electric_slots(),
            electric_50kw: default_electric_slots(),
        }
    }
}

impl CapacityConfig {
    pub fn slots(&self, category: VehicleCategory) -> i32 {
        match category {
            VehicleCategory::Standard => self.standard,
            VehicleCategory::Electric20kW => self.electric_20kw,
            VehicleCategory::Electric50kW => self.electric_50kw,
        }
    }
}

/// Tariff selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingConfig {
    #[default]
    Free,
    PerHour {
        rate: Decimal,
    },
    PerHourWithFixedAmount {
        rate: Decimal,
        fixed: Decimal,
    },
}

impl PricingConfig {
    /// Build the policy; negative amounts fail with `InvalidAmount`
    pub fn build(&self) -> Result<PerHourPricing> {
        match self {
            PricingConfig::Free => Ok(PerHourPricing::free()),
            PricingConfig::PerHour { rate } => PerHourPricing::new(*rate),
            PricingConfig::PerHourWithFixedAmount { rate, fixed } => {
                PerHourPricing::with_fixed_amount(*rate, *fixed)
            }
        }
    }
}

impl fmt::Display for PricingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingConfig::Free => write!(f, "free"),
            PricingConfig::PerHour { rate } => write!(f, "{}/hour", rate),
            PricingConfig::PerHourWithFixedAmount { rate, fixed } => {
                write!(f, "{} fixed + {}/hour", fixed, rate)
            }
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tollgate");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location, or the default config
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            )))
        })?;
        Self::load_from_str(&content)
    }

    /// Parse config from TOML text
    pub fn load_from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse config TOML: {}",
                e
            )))
        })
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build an empty parking from this config
    pub fn build_parking(&self) -> Result<Parking> {
        let policy: Box<dyn PricingPolicy> = Box::new(self.pricing.build()?);
        Parking::with_pricing_policy(
            self.capacity.standard,
            self.capacity.electric_20kw,
            self.capacity.electric_50kw,
            Some(policy),
        )
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tollgate Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        for category in VehicleCategory::ALL {
            writeln!(f, "{:<15} {} slots", format!("{}:", category), self.capacity.slots(category))?;
        }
        writeln!(f, "{:<15} {}", "Pricing:", self.pricing)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
