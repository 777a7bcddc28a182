mod common;

use common::{date, monday, time, tuesday, TestClinic};

#[tokio::test]
async fn provider_schedule_is_active_only_and_sorted_by_start() {
    let clinic = TestClinic::new();
    let provider = clinic.add_default_provider("Dr. Smith", "General Practitioner").await;
    let other_provider = clinic.add_default_provider("Dr. Jones", "Pediatrician").await;
    let requester = clinic.add_requester("John Doe").await;

    // Booked out of order on purpose.
    let late = clinic
        .booking
        .create_booking(requester, provider, monday(), time(14, 0), time(14, 30))
        .await
        .expect("booking should succeed");
    let early = clinic
        .booking
        .create_booking(requester, provider, monday(), time(9, 0), time(9, 30))
        .await
        .expect("booking should succeed");
    let cancelled = clinic
        .booking
        .create_booking(requester, provider, monday(), time(11, 0), time(11, 30))
        .await
        .expect("booking should succeed");
    clinic
        .booking
        .cancel_booking(cancelled)
        .await
        .expect("cancellation should succeed");

    // Noise on another date and another provider.
    clinic
        .booking
        .create_booking(requester, provider, tuesday(), time(9, 0), time(9, 30))
        .await
        .expect("booking should succeed");
    clinic
        .booking
        .create_booking(requester, other_provider, monday(), time(10, 0), time(10, 30))
        .await
        .expect("booking should succeed");

    let schedule = clinic.schedule.provider_schedule(provider, monday()).await;
    let ids: Vec<_> = schedule.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![early, late]);
    assert!(schedule.iter().all(|b| b.provider_id == provider && b.date == monday()));
}

#[tokio::test]
async fn requester_bookings_sort_by_date_then_start() {
    let clinic = TestClinic::new();
    let provider = clinic.add_default_provider("Dr. Smith", "General Practitioner").await;
    let requester = clinic.add_requester("John Doe").await;
    let other = clinic.add_requester("Jane Smith").await;

    let tue_morning = clinic
        .booking
        .create_booking(requester, provider, tuesday(), time(9, 0), time(9, 30))
        .await
        .expect("booking should succeed");
    let mon_late = clinic
        .booking
        .create_booking(requester, provider, monday(), time(15, 0), time(15, 30))
        .await
        .expect("booking should succeed");
    let mon_early = clinic
        .booking
        .create_booking(requester, provider, monday(), time(9, 0), time(9, 30))
        .await
        .expect("booking should succeed");

    // Another requester's booking must not show up.
    clinic
        .booking
        .create_booking(other, provider, monday(), time(10, 0), time(10, 30))
        .await
        .expect("booking should succeed");

    let bookings = clinic.schedule.requester_bookings(requester).await;
    let ids: Vec<_> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![mon_early, mon_late, tue_morning]);
}

#[tokio::test]
async fn unknown_ids_yield_empty_views() {
    let clinic = TestClinic::new();

    assert!(clinic.schedule.provider_schedule(404, date(2024, 5, 6)).await.is_empty());
    assert!(clinic.schedule.requester_bookings(404).await.is_empty());
}
