//! Replay a timestamped admit/release script against a parking
//!
//! Script file (TOML):
//!
//! ```toml
//! [[events]]
//! at = "2024-03-01T08:00:00Z"
//! action = "admit"
//! category = "standard"
//! label = "a"
//!
//! [[events]]
//! at = "2024-03-01T09:15:00Z"
//! action = "release"
//! label = "a"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tollgate_domain::model::SlotOccupancy;
use tollgate_domain::{ManualClock, Money, Ticket};
use tollgate_types::{Error, Result};
use tracing::{debug, info};

use crate::config::Config;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEvent {
    pub at: DateTime<Utc>,
    pub action: EventAction,
    /// Vehicle category name; required for admissions
    #[serde(default)]
    pub category: Option<String>,
    /// Caller's name for the stay, used to match a release to its admission
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    Admit,
    Release,
}

/// What happened to one script event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Admitted { ticket_id: String, category: String },
    Refused { category: String },
    Released { ticket_id: String, minutes: i64, amount: Money },
    TicketNotFound,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventReport {
    pub at: DateTime<Utc>,
    pub label: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub events: Vec<EventReport>,
    pub occupancy: Vec<SlotOccupancy>,
    /// Tickets still active when the script ended, by label
    pub still_parked: Vec<String>,
    pub total_revenue: Money,
}

impl SimulationReport {
    pub fn admitted(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Admitted { .. }))
    }

    pub fn refused(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Refused { .. }))
    }

    pub fn released(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Released { .. }))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.events.iter().filter(|e| pred(&e.outcome)).count()
    }
}

impl Script {
    /// Load a script from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    /// Parse a script from TOML text
    pub fn load_from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Script(format!("Failed to parse script TOML: {}", e)))
    }

    fn validate(&self) -> Result<()> {
        for pair in self.events.windows(2) {
            if pair[1].at < pair[0].at {
                return Err(Error::Script(format!(
                    "Events out of order: {} ({}) comes after {} ({})",
                    pair[1].label, pair[1].at, pair[0].label, pair[0].at
                )));
            }
        }
        for event in &self.events {
            if event.action == EventAction::Admit && event.category.is_none() {
                return Err(Error::Script(format!(
                    "Admission {:?} at {} has no category",
                    event.label, event.at
                )));
            }
        }
        Ok(())
    }
}

/// Run `script` against a fresh parking built from `config`
pub fn run_script(config: &Config, script: &Script) -> Result<SimulationReport> {
    script.validate()?;

    let start = script.events.first().map(|e| e.at).unwrap_or_else(Utc::now);
    let clock = ManualClock::new(start);
    let mut parking = config.build_parking()?.with_clock(clock.clone());
    let mut parked: HashMap<String, Ticket> = HashMap::new();
    let mut events = Vec::with_capacity(script.events.len());
    let mut total_revenue = Decimal::ZERO;

    for event in &script.events {
        clock.set(event.at);
        let outcome = match event.action {
            EventAction::Admit => {
                if parked.contains_key(&event.label) {
                    return Err(Error::Script(format!(
                        "Label {:?} admitted twice without release",
                        event.label
                    )));
                }
                let category = event.category.clone().unwrap_or_default();
                match parking.admit_named(&category) {
                    Some(ticket) => {
                        let ticket_id = ticket.id().to_string();
                        parked.insert(event.label.clone(), ticket);
                        Outcome::Admitted { ticket_id, category }
                    }
                    None => Outcome::Refused { category },
                }
            }
            EventAction::Release => {
                let released = match parked.remove(&event.label) {
                    Some(ticket) => parking.release(&ticket),
                    None => parking.release_by_id(&event.label),
                };
                match released {
                    Ok(ticket) => {
                        let amount = ticket.amount().unwrap_or_default();
                        total_revenue += amount;
                        Outcome::Released {
                            ticket_id: ticket.id().to_string(),
                            minutes: ticket.duration().map(|d| d.num_minutes()).unwrap_or(0),
                            amount,
                        }
                    }
                    Err(Error::TicketNotFound(_)) => Outcome::TicketNotFound,
                    Err(e) => return Err(e),
                }
            }
        };
        debug!(label = %event.label, ?outcome, "Script event applied");
        events.push(EventReport {
            at: event.at,
            label: event.label.clone(),
            outcome,
        });
    }

    let mut still_parked: Vec<String> = parked.into_keys().collect();
    still_parked.sort();

    info!(
        events = events.len(),
        still_parked = still_parked.len(),
        %total_revenue,
        "Simulation finished"
    );

    Ok(SimulationReport {
        events,
        occupancy: parking.occupancy(),
        still_parked,
        total_revenue,
    })
}
