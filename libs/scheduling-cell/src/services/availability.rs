use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::debug;

use crate::error::SchedulingError;
use crate::models::Provider;

/// Check that `[start, end)` on `date` falls inside the provider's
/// configured window for that weekday. A provider with no window for
/// the weekday is unavailable all day.
pub fn check_within_availability(
    provider: &Provider,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<(), SchedulingError> {
    let weekday = date.weekday();
    let outside = SchedulingError::OutsideAvailability {
        provider_id: provider.id,
        weekday,
        start,
        end,
    };

    let window = match provider.weekly_hours.get(&weekday) {
        Some(window) => window,
        None => {
            debug!("Provider {} has no hours on {:?}", provider.id, weekday);
            return Err(outside);
        }
    };

    if start < window.start || end > window.end {
        return Err(outside);
    }

    Ok(())
}

/// Boolean form of [`check_within_availability`].
pub fn is_within_availability(
    provider: &Provider,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> bool {
    check_within_availability(provider, date, start, end).is_ok()
}
