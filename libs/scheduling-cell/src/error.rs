use chrono::{NaiveDate, NaiveTime, Weekday};
use thiserror::Error;

use crate::models::EntityId;

/// Failure taxonomy for the engine: not-found, constraint violation,
/// already-terminal. Callers that only care whether a booking was
/// created can treat any error as "no booking".
#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("Requester not found: {0}")]
    RequesterNotFound(EntityId),

    #[error("Provider not found: {0}")]
    ProviderNotFound(EntityId),

    #[error("Booking not found: {0}")]
    BookingNotFound(EntityId),

    #[error("No bookings may be created on blackout date {0}")]
    BlackoutDate(NaiveDate),

    #[error("Window {start}-{end} is outside provider {provider_id}'s hours on {weekday}")]
    OutsideAvailability {
        provider_id: EntityId,
        weekday: Weekday,
        start: NaiveTime,
        end: NaiveTime,
    },

    #[error("Window overlaps booking {conflicting_booking_id} for provider {provider_id} on {date}")]
    SlotConflict {
        provider_id: EntityId,
        date: NaiveDate,
        conflicting_booking_id: EntityId,
    },

    #[error("Booking {0} is already cancelled")]
    AlreadyCancelled(EntityId),
}
