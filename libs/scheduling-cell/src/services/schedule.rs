use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Booking, EntityId};
use crate::store::SchedulingStore;

/// Read-only views over committed, active bookings. Unknown ids yield
/// empty results rather than errors.
pub struct ScheduleService {
    store: SchedulingStore,
}

impl ScheduleService {
    pub fn new(store: SchedulingStore) -> Self {
        Self { store }
    }

    /// A provider's active bookings for one date, ascending by start
    /// time.
    pub async fn provider_schedule(&self, provider_id: EntityId, date: NaiveDate) -> Vec<Booking> {
        let state = self.store.read().await;

        let mut schedule: Vec<Booking> = state
            .bookings
            .values()
            .filter(|b| b.provider_id == provider_id && b.date == date && b.status.is_active())
            .cloned()
            .collect();
        schedule.sort_by_key(|b| b.start_time);

        debug!(
            "Provider {} has {} active bookings on {}",
            provider_id,
            schedule.len(),
            date
        );
        schedule
    }

    /// A requester's active bookings, ascending by date then start
    /// time.
    pub async fn requester_bookings(&self, requester_id: EntityId) -> Vec<Booking> {
        let state = self.store.read().await;

        let mut bookings: Vec<Booking> = state
            .bookings
            .values()
            .filter(|b| b.requester_id == requester_id && b.status.is_active())
            .cloned()
            .collect();
        bookings.sort_by_key(|b| (b.date, b.start_time));

        bookings
    }
}
