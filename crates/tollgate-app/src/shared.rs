//! Thread-safe handle to one parking
//!
//! Admission and release each read the slot table and then mutate it, so
//! every operation runs with the whole `Parking` locked.

use std::sync::{Arc, Mutex, MutexGuard};

use tollgate_domain::model::SlotOccupancy;
use tollgate_domain::{Parking, Ticket};
use tollgate_types::{Error, Result, VehicleCategory};

#[derive(Debug, Clone)]
pub struct SharedParking {
    inner: Arc<Mutex<Parking>>,
}

impl SharedParking {
    pub fn new(parking: Parking) -> Self {
        Self {
            inner: Arc::new(Mutex::new(parking)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Parking>> {
        self.inner.lock().map_err(|_| Error::LockPoisoned)
    }

    pub fn admit(&self, category: VehicleCategory) -> Result<Option<Ticket>> {
        Ok(self.lock()?.admit(category))
    }

    pub fn admit_named(&self, category: &str) -> Result<Option<Ticket>> {
        Ok(self.lock()?.admit_named(category))
    }

    pub fn release(&self, ticket: &Ticket) -> Result<Ticket> {
        self.lock()?.release(ticket)
    }

    pub fn release_by_id(&self, ticket_id: &str) -> Result<Ticket> {
        self.lock()?.release_by_id(ticket_id)
    }

    pub fn available(&self, category: VehicleCategory) -> Result<u32> {
        Ok(self.lock()?.available(category))
    }

    pub fn occupancy(&self) -> Result<Vec<SlotOccupancy>> {
        Ok(self.lock()?.occupancy())
    }

    /// Run several operations under one lock
    pub fn with_parking<R>(&self, f: impl FnOnce(&mut Parking) -> R) -> Result<R> {
        let mut parking = self.lock()?;
        Ok(f(&mut parking))
    }
}
