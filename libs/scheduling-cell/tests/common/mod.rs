#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

use notification_cell::TemplateDrafter;
use scheduling_cell::{
    AvailabilityWindow, BookingService, EntityId, NewProvider, NewRequester, ScheduleService,
    SchedulingStore, WaitlistService,
};

/// Engine wired up the way the excluded HTTP layer would wire it: one
/// store shared by every service, template drafter standing in for the
/// language model.
pub struct TestClinic {
    pub store: SchedulingStore,
    pub booking: Arc<BookingService>,
    pub waitlist: WaitlistService,
    pub schedule: ScheduleService,
}

impl TestClinic {
    pub fn new() -> Self {
        let store = SchedulingStore::new();
        let drafter = Arc::new(TemplateDrafter);

        Self {
            booking: Arc::new(BookingService::new(store.clone(), drafter)),
            waitlist: WaitlistService::new(store.clone()),
            schedule: ScheduleService::new(store.clone()),
            store,
        }
    }

    pub async fn add_default_provider(&self, name: &str, specialization: &str) -> EntityId {
        self.store
            .add_provider(NewProvider {
                name: name.to_string(),
                specialization: specialization.to_string(),
                weekly_hours: None,
            })
            .await
    }

    pub async fn add_provider_with_hours(
        &self,
        name: &str,
        specialization: &str,
        weekly_hours: HashMap<Weekday, AvailabilityWindow>,
    ) -> EntityId {
        self.store
            .add_provider(NewProvider {
                name: name.to_string(),
                specialization: specialization.to_string(),
                weekly_hours: Some(weekly_hours),
            })
            .await
    }

    pub async fn add_requester(&self, name: &str) -> EntityId {
        self.store
            .add_requester(NewRequester {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
                phone: "555-1234".to_string(),
                address: "123 Main St".to_string(),
                birth_date: date(1980, 5, 15),
                preferred_providers: vec![],
                family_members: vec![],
            })
            .await
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid test time")
}

/// Deterministic enqueue timestamps on the morning before the test
/// Monday.
pub fn clock(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap()
}

/// 2024-05-06 was a Monday.
pub fn monday() -> NaiveDate {
    date(2024, 5, 6)
}

pub fn tuesday() -> NaiveDate {
    date(2024, 5, 7)
}

pub fn saturday() -> NaiveDate {
    date(2024, 5, 11)
}

/// The dermatologist schedule from the sample data: Monday, Wednesday
/// and Friday, 10:00-18:00.
pub fn mon_wed_fri_hours() -> HashMap<Weekday, AvailabilityWindow> {
    let window = AvailabilityWindow {
        start: time(10, 0),
        end: time(18, 0),
    };
    [Weekday::Mon, Weekday::Wed, Weekday::Fri]
        .into_iter()
        .map(|day| (day, window))
        .collect()
}
