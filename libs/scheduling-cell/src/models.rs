use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Identities are minted from one process-wide counter shared by every
/// entity kind, so an id is unique across requesters, providers, and
/// bookings alike. Ids are never reused.
pub type EntityId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requester {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub birth_date: NaiveDate,
    /// Free-text display names, not foreign keys.
    pub preferred_providers: Vec<String>,
    pub family_members: Vec<String>,
}

/// The single contiguous bookable range within one weekday. Providers
/// do not support split shifts or breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: EntityId,
    pub name: String,
    pub specialization: String,
    /// A weekday with no entry means the provider is unavailable that day.
    pub weekly_hours: HashMap<Weekday, AvailabilityWindow>,
}

impl Provider {
    /// Default availability: Monday to Friday, 09:00-17:00, no weekend
    /// entries.
    pub fn default_weekly_hours() -> HashMap<Weekday, AvailabilityWindow> {
        let window = AvailabilityWindow {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        };

        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ]
        .into_iter()
        .map(|day| (day, window))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
}

impl BookingStatus {
    /// Every status except Cancelled keeps its claim on the slot.
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: EntityId,
    pub requester_id: EntityId,
    pub provider_id: EntityId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: BookingStatus,
}

/// Waitlist urgency. Ordering follows the numeric level, Urgent highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
    Urgent = 4,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub requester_id: EntityId,
    pub requested_date: NaiveDate,
    pub priority: Priority,
    /// Empty means no preference.
    pub preferred_provider_ids: Vec<EntityId>,
    /// Assigned at insertion from the clock value passed to enqueue.
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRequester {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub preferred_providers: Vec<String>,
    #[serde(default)]
    pub family_members: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProvider {
    pub name: String,
    pub specialization: String,
    /// None applies the Monday-Friday 09:00-17:00 default.
    pub weekly_hours: Option<HashMap<Weekday, AvailabilityWindow>>,
}
