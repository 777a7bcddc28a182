use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info, warn};

use notification_cell::EmailDrafter;

use crate::error::SchedulingError;
use crate::models::{Booking, BookingStatus, EntityId};
use crate::services::{availability, conflict, waitlist};
use crate::store::{SchedulingStore, StoreInner};

/// Orchestrates booking creation and cancellation. Every
/// check-then-commit sequence runs under one write guard on the store,
/// including the waitlist backfill triggered by cancellation, so no
/// interleaving of concurrent calls can double-book a provider.
pub struct BookingService {
    store: SchedulingStore,
    drafter: Arc<dyn EmailDrafter>,
}

/// Facts collected under the lock for the cancellation email, drafted
/// after the guard is released.
struct CancellationNotice {
    requester_name: String,
    provider_name: String,
    date: NaiveDate,
    time_range: String,
}

impl BookingService {
    pub fn new(store: SchedulingStore, drafter: Arc<dyn EmailDrafter>) -> Self {
        Self { store, drafter }
    }

    /// Create a booking. Checks run in a fixed order and the first
    /// failure wins: blackout date, provider exists, requester exists,
    /// availability window, slot conflict. On success the booking is
    /// committed as Scheduled and the confirmation notification fires
    /// after the lock is released.
    pub async fn create_booking(
        &self,
        requester_id: EntityId,
        provider_id: EntityId,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<EntityId, SchedulingError> {
        info!(
            "Booking requester {} with provider {} on {} {}-{}",
            requester_id, provider_id, date, start_time, end_time
        );

        let booking_id = {
            let mut state = self.store.write().await;
            create_in_state(
                &mut state,
                requester_id,
                provider_id,
                date,
                start_time,
                end_time,
            )?
        };

        // Simulated confirmation send; delivery is outside this cell's contract.
        debug!("Sending confirmation for booking {}", booking_id);

        Ok(booking_id)
    }

    /// Cancel a booking and backfill the vacated slot from the
    /// waitlist. Returns the id of the replacement booking when the
    /// backfill finds one. Cancellation succeeds regardless of the
    /// backfill outcome, and a failed notice draft never rolls it back.
    pub async fn cancel_booking(
        &self,
        booking_id: EntityId,
    ) -> Result<Option<EntityId>, SchedulingError> {
        info!("Cancelling booking {}", booking_id);

        let (notice, backfill) = {
            let mut state = self.store.write().await;

            let booking = state
                .bookings
                .get_mut(&booking_id)
                .ok_or(SchedulingError::BookingNotFound(booking_id))?;
            if booking.status == BookingStatus::Cancelled {
                return Err(SchedulingError::AlreadyCancelled(booking_id));
            }
            booking.status = BookingStatus::Cancelled;
            let vacated = booking.clone();

            let notice = cancellation_notice(&state, &vacated);
            let backfill = waitlist::fill_vacated_slot(
                &mut state,
                vacated.provider_id,
                vacated.date,
                vacated.start_time,
                vacated.end_time,
            );

            (notice, backfill)
        };

        if let Some(notice) = notice {
            match self
                .drafter
                .draft_cancellation_notice(
                    &notice.requester_name,
                    notice.date,
                    &notice.time_range,
                    &notice.provider_name,
                )
                .await
            {
                Ok(text) => debug!("Cancellation notice drafted ({} chars)", text.len()),
                Err(err) => warn!("Cancellation notice draft failed: {}", err),
            }
        }

        if let Some(new_booking_id) = backfill {
            // Same fire-and-forget contract as the confirmation send.
            debug!("Sending waitlist notification for booking {}", new_booking_id);
        }

        Ok(backfill)
    }
}

/// Shared creation path for direct bookings and waitlist backfill. The
/// caller holds the store write guard.
pub(crate) fn create_in_state(
    state: &mut StoreInner,
    requester_id: EntityId,
    provider_id: EntityId,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<EntityId, SchedulingError> {
    if state.blackout_dates.contains(&date) {
        debug!("Rejected booking on blackout date {}", date);
        return Err(SchedulingError::BlackoutDate(date));
    }

    let provider = state
        .providers
        .get(&provider_id)
        .ok_or(SchedulingError::ProviderNotFound(provider_id))?;
    if !state.requesters.contains_key(&requester_id) {
        return Err(SchedulingError::RequesterNotFound(requester_id));
    }

    availability::check_within_availability(provider, date, start_time, end_time)?;

    if let Some(conflicting_booking_id) = conflict::find_conflict(
        state.bookings.values(),
        provider_id,
        date,
        start_time,
        end_time,
    ) {
        debug!(
            "Requested window conflicts with existing booking {}",
            conflicting_booking_id
        );
        return Err(SchedulingError::SlotConflict {
            provider_id,
            date,
            conflicting_booking_id,
        });
    }

    let id = state.mint_id();
    state.bookings.insert(
        id,
        Booking {
            id,
            requester_id,
            provider_id,
            date,
            start_time,
            end_time,
            status: BookingStatus::Scheduled,
        },
    );
    info!("Booking {} committed for provider {} on {}", id, provider_id, date);

    Ok(id)
}

fn cancellation_notice(state: &StoreInner, booking: &Booking) -> Option<CancellationNotice> {
    let requester = state.requesters.get(&booking.requester_id)?;
    let provider = state.providers.get(&booking.provider_id)?;

    Some(CancellationNotice {
        requester_name: requester.name.clone(),
        provider_name: provider.name.clone(),
        date: booking.date,
        time_range: format!(
            "{} - {}",
            booking.start_time.format("%H:%M"),
            booking.end_time.format("%H:%M")
        ),
    })
}
