use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::{debug, info};

use crate::error::SchedulingError;
use crate::models::{EntityId, Priority, WaitlistEntry};
use crate::services::booking;
use crate::store::{SchedulingStore, StoreInner};

/// Priority-ordered pending requests. The ordering invariant
/// (priority descending, then added_at ascending, insertion order for
/// full ties) is reestablished eagerly after every insertion, never
/// lazily at read time.
pub struct WaitlistService {
    store: SchedulingStore,
}

impl WaitlistService {
    pub fn new(store: SchedulingStore) -> Self {
        Self { store }
    }

    /// Add a requester to the waitlist. `now` is passed in rather than
    /// read from the ambient clock so ordering stays deterministic
    /// under test.
    pub async fn enqueue(
        &self,
        requester_id: EntityId,
        requested_date: NaiveDate,
        priority: Priority,
        preferred_provider_ids: Vec<EntityId>,
        now: DateTime<Utc>,
    ) -> Result<(), SchedulingError> {
        let mut state = self.store.write().await;

        if !state.requesters.contains_key(&requester_id) {
            return Err(SchedulingError::RequesterNotFound(requester_id));
        }

        state.waitlist.push(WaitlistEntry {
            requester_id,
            requested_date,
            priority,
            preferred_provider_ids,
            added_at: now,
        });
        // sort_by_key is stable, so full ties keep insertion order.
        state
            .waitlist
            .sort_by_key(|entry| (Reverse(entry.priority), entry.added_at));

        info!(
            "Requester {} waitlisted for {} at priority {:?}",
            requester_id, requested_date, priority
        );
        Ok(())
    }

    /// Snapshot of the queue in its maintained order.
    pub async fn entries(&self) -> Vec<WaitlistEntry> {
        self.store.read().await.waitlist.clone()
    }
}

/// First-fit backfill of a vacated slot. Entries are scanned in queue
/// order; an entry is eligible only when its requested date matches
/// the vacated date and it either has no provider preference or lists
/// the vacated provider. The first entry that books successfully is
/// removed from the queue and wins; later entries are never considered
/// after a success, even if they would also fit.
pub(crate) fn fill_vacated_slot(
    state: &mut StoreInner,
    provider_id: EntityId,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Option<EntityId> {
    for index in 0..state.waitlist.len() {
        let entry = &state.waitlist[index];
        let eligible = entry.requested_date == date
            && (entry.preferred_provider_ids.is_empty()
                || entry.preferred_provider_ids.contains(&provider_id));
        if !eligible {
            continue;
        }

        let requester_id = entry.requester_id;
        match booking::create_in_state(state, requester_id, provider_id, date, start_time, end_time)
        {
            Ok(new_booking_id) => {
                state.waitlist.remove(index);
                info!(
                    "Backfilled vacated slot with booking {} for requester {}",
                    new_booking_id, requester_id
                );
                return Some(new_booking_id);
            }
            Err(err) => {
                debug!(
                    "Waitlist candidate {} could not take the slot: {}",
                    requester_id, err
                );
            }
        }
    }

    None
}
