//! Parking ticket: one vehicle's stay

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tollgate_types::VehicleCategory;

use super::Money;

/// A single-use stay token issued on admission and priced on release
///
/// Two tickets are the same ticket when their ids match. Hashing uses the
/// id alone so it agrees with equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    id: String,
    category: VehicleCategory,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    amount: Option<Money>,
}

impl Ticket {
    /// Create a ticket that starts now
    pub fn new(id: impl Into<String>, category: VehicleCategory) -> Self {
        Self::issued_at(id, category, Utc::now())
    }

    /// Create a ticket with an explicit start time
    pub fn issued_at(id: impl Into<String>, category: VehicleCategory, start_time: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            category,
            start_time,
            end_time: None,
            amount: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn amount(&self) -> Option<Money> {
        self.amount
    }

    pub fn set_start_time(&mut self, start_time: DateTime<Utc>) {
        self.start_time = start_time;
    }

    pub fn set_end_time(&mut self, end_time: DateTime<Utc>) {
        self.end_time = Some(end_time);
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = Some(amount);
    }

    /// Whether the stay has been closed and priced
    pub fn is_released(&self) -> bool {
        self.end_time.is_some() && self.amount.is_some()
    }

    /// Length of the stay, once it has ended
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ticket {}

impl Hash for Ticket {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id: {} startDate: {}", self.id, self.start_time.to_rfc3339())?;
        match self.end_time {
            Some(end) => write!(f, " endDate: {}", end.to_rfc3339())?,
            None => write!(f, " endDate: -")?,
        }
        match self.amount {
            Some(amount) => write!(f, " amount: {}", amount),
            None => write!(f, " amount: -"),
        }
    }
}
