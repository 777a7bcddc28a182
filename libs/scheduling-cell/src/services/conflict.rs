use chrono::{NaiveDate, NaiveTime};

use crate::models::{Booking, EntityId};

/// Two half-open intervals [s1, e1) and [s2, e2) overlap iff
/// s1 < e2 AND s2 < e1. Touching endpoints do not conflict.
pub fn intervals_overlap(s1: NaiveTime, e1: NaiveTime, s2: NaiveTime, e2: NaiveTime) -> bool {
    s1 < e2 && s2 < e1
}

/// Return the first active booking for the provider and date whose
/// window overlaps the candidate window. Cancelled bookings never
/// conflict.
pub fn find_conflict<'a, I>(
    bookings: I,
    provider_id: EntityId,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> Option<EntityId>
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings.into_iter().find_map(|booking| {
        let relevant = booking.provider_id == provider_id
            && booking.date == date
            && booking.status.is_active();

        if relevant && intervals_overlap(start, end, booking.start_time, booking.end_time) {
            Some(booking.id)
        } else {
            None
        }
    })
}

/// Boolean form of [`find_conflict`].
pub fn has_conflict<'a, I>(
    bookings: I,
    provider_id: EntityId,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> bool
where
    I: IntoIterator<Item = &'a Booking>,
{
    find_conflict(bookings, provider_id, date, start, end).is_some()
}
