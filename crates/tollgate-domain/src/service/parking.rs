//! Parking facility: admission, release and billing
//!
//! A `Parking` owns its slot table, the set of active tickets and one
//! pricing policy. It is not synchronised; callers sharing one across
//! threads wrap it in a lock (see `SharedParking` in the app crate).

use std::collections::HashMap;

use tollgate_types::{Error, Result, VehicleCategory};
use tracing::{debug, warn};
use uuid::Uuid;

use super::clock::{Clock, SystemClock};
use super::pricing::{PerHourPricing, PricingPolicy};
use crate::model::{SlotCapacity, SlotOccupancy, Ticket};

#[derive(Debug)]
pub struct Parking {
    capacities: HashMap<VehicleCategory, SlotCapacity>,
    /// Tickets currently occupying a slot, keyed by ticket id
    active_tickets: HashMap<String, Ticket>,
    pricing_policy: Box<dyn PricingPolicy>,
    clock: Box<dyn Clock>,
}

impl Parking {
    /// Create a parking with free pricing (zero hourly rate)
    ///
    /// Fails with `InvalidCapacity` if any slot count is negative.
    pub fn new(standard_slots: i32, electric_20kw_slots: i32, electric_50kw_slots: i32) -> Result<Self> {
        Self::with_pricing_policy(standard_slots, electric_20kw_slots, electric_50kw_slots, None)
    }

    /// Create a parking with the given pricing policy
    ///
    /// `None` falls back to free pricing, same as [`Parking::new`].
    pub fn with_pricing_policy(
        standard_slots: i32,
        electric_20kw_slots: i32,
        electric_50kw_slots: i32,
        pricing_policy: Option<Box<dyn PricingPolicy>>,
    ) -> Result<Self> {
        let slots = [
            (VehicleCategory::Standard, standard_slots),
            (VehicleCategory::Electric20kW, electric_20kw_slots),
            (VehicleCategory::Electric50kW, electric_50kw_slots),
        ];

        let mut capacities = HashMap::with_capacity(slots.len());
        for (category, maximum) in slots {
            let maximum = u32::try_from(maximum).map_err(|_| {
                Error::InvalidCapacity(format!(
                    "Each number of slots must be positive ({} = {})",
                    category, maximum
                ))
            })?;
            capacities.insert(category, SlotCapacity::new(maximum));
        }

        let pricing_policy =
            pricing_policy.unwrap_or_else(|| Box::new(PerHourPricing::free()) as Box<dyn PricingPolicy>);

        Ok(Self {
            capacities,
            active_tickets: HashMap::new(),
            pricing_policy,
            clock: Box::new(SystemClock),
        })
    }

    /// Replace the time source used to stamp tickets
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Admit a vehicle and issue its ticket
    ///
    /// Returns `None` when the category has no free slot.
    pub fn admit(&mut self, category: VehicleCategory) -> Option<Ticket> {
        let Some(slot) = self.capacities.get_mut(&category) else {
            warn!(%category, "No slot table for category, admission refused");
            return None;
        };
        if slot.is_full() {
            warn!(%category, maximum = slot.maximum(), "No capacity left, admission refused");
            return None;
        }

        let ticket = Ticket::issued_at(Uuid::new_v4().to_string(), category, self.clock.now());
        slot.increment();
        self.active_tickets.insert(ticket.id().to_string(), ticket.clone());
        debug!(ticket = ticket.id(), %category, occupied = slot.occupied(), "Vehicle admitted");
        Some(ticket)
    }

    /// Admit by category name
    ///
    /// An unknown or empty name is treated like a full category: no ticket,
    /// no error.
    pub fn admit_named(&mut self, category: &str) -> Option<Ticket> {
        match category.parse::<VehicleCategory>() {
            Ok(category) => self.admit(category),
            Err(e) => {
                warn!("Admission refused: {}", e);
                None
            }
        }
    }

    /// Release a vehicle, pricing its stay
    ///
    /// Fails with `TicketNotFound` if the ticket is not active here: never
    /// issued, already released, or issued by another parking.
    ///
    /// Prices the ticket as recorded at admission. `ticket` itself is not
    /// mutated; only the returned ticket carries `end_time` and `amount`.
    pub fn release(&mut self, ticket: &Ticket) -> Result<Ticket> {
        self.release_by_id(ticket.id())
    }

    /// Release by ticket id; see [`Parking::release`]
    pub fn release_by_id(&mut self, ticket_id: &str) -> Result<Ticket> {
        let start_time = match self.active_tickets.get(ticket_id) {
            Some(ticket) => ticket.start_time(),
            None => return Err(Self::not_found(ticket_id)),
        };

        let end_time = self.clock.now();
        let amount = self
            .pricing_policy
            .calculate_price(Some(start_time), Some(end_time))?;

        let Some(mut ticket) = self.active_tickets.remove(ticket_id) else {
            return Err(Self::not_found(ticket_id));
        };
        ticket.set_end_time(end_time);
        ticket.set_amount(amount);

        if let Some(slot) = self.capacities.get_mut(&ticket.category()) {
            slot.decrement();
        }
        debug!(ticket = ticket.id(), category = %ticket.category(), %amount, "Vehicle released");
        Ok(ticket)
    }

    fn not_found(ticket_id: &str) -> Error {
        warn!("Error in removing vehicle with ticket: {:?}", ticket_id);
        Error::TicketNotFound(format!("Ticket {:?} not found in the system", ticket_id))
    }

    pub fn capacity(&self, category: VehicleCategory) -> Option<&SlotCapacity> {
        self.capacities.get(&category)
    }

    /// Free slots left for a category
    pub fn available(&self, category: VehicleCategory) -> u32 {
        self.capacities
            .get(&category)
            .map(SlotCapacity::available)
            .unwrap_or(0)
    }

    pub fn is_active(&self, ticket: &Ticket) -> bool {
        self.active_tickets.contains_key(ticket.id())
    }

    pub fn active_tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.active_tickets.values()
    }

    pub fn active_count(&self) -> usize {
        self.active_tickets.len()
    }

    pub fn pricing_policy(&self) -> &dyn PricingPolicy {
        self.pricing_policy.as_ref()
    }

    /// Slot table snapshot in category order
    pub fn occupancy(&self) -> Vec<SlotOccupancy> {
        VehicleCategory::ALL
            .iter()
            .filter_map(|category| {
                self.capacities.get(category).map(|slot| SlotOccupancy {
                    category: *category,
                    maximum: slot.maximum(),
                    occupied: slot.occupied(),
                })
            })
            .collect()
    }
}
