use chrono::NaiveDate;

use notification_cell::{EmailDrafter, TemplateDrafter};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[tokio::test]
async fn cancellation_notice_carries_the_appointment_facts() {
    let drafter = TemplateDrafter;

    let notice = drafter
        .draft_cancellation_notice("Jane Smith", date(2024, 5, 6), "10:00 - 10:30", "Dr. Wilson")
        .await
        .expect("template drafting is infallible");

    assert!(notice.contains("Jane Smith"));
    assert!(notice.contains("Dr. Wilson"));
    assert!(notice.contains("2024-05-06"));
    assert!(notice.contains("10:00 - 10:30"));
}

#[tokio::test]
async fn reply_addresses_the_sender_and_subject() {
    let drafter = TemplateDrafter;

    let reply = drafter
        .draft_reply(
            "John Doe",
            "Medical Records Request",
            "Could you please prepare my records before June 3rd?",
        )
        .await
        .expect("template drafting is infallible");

    assert!(reply.starts_with("Dear John Doe"));
    assert!(reply.contains("Medical Records Request"));
}
