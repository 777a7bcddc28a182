use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::NotificationError;

/// Drafts requester-facing email text. The scheduling engine treats
/// implementations as a black box: the output is never inspected, and
/// a drafting failure must never affect a committed booking or
/// cancellation.
#[async_trait]
pub trait EmailDrafter: Send + Sync {
    /// Draft a notice for an appointment that was just cancelled.
    async fn draft_cancellation_notice(
        &self,
        requester_name: &str,
        date: NaiveDate,
        time_range: &str,
        provider_name: &str,
    ) -> Result<String, NotificationError>;

    /// Draft a reply to an inbound clinic email.
    async fn draft_reply(
        &self,
        sender_name: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, NotificationError>;
}

/// Deterministic template-based drafter, used in tests and as an
/// offline fallback when no language model is configured.
#[derive(Debug, Default, Clone)]
pub struct TemplateDrafter;

#[async_trait]
impl EmailDrafter for TemplateDrafter {
    async fn draft_cancellation_notice(
        &self,
        requester_name: &str,
        date: NaiveDate,
        time_range: &str,
        provider_name: &str,
    ) -> Result<String, NotificationError> {
        Ok(format!(
            "Dear {},\n\n\
             We regret to inform you that your appointment with {} on {} ({}) \
             has been cancelled.\n\n\
             Please contact our office to reschedule at your convenience. \
             We apologize for any inconvenience this may cause.\n\n\
             Kind regards,\nThe Clinic Scheduling Team",
            requester_name, provider_name, date, time_range
        ))
    }

    async fn draft_reply(
        &self,
        sender_name: &str,
        subject: &str,
        _body: &str,
    ) -> Result<String, NotificationError> {
        Ok(format!(
            "Dear {},\n\n\
             Thank you for your message regarding \"{}\". A member of our team \
             has reviewed it and will follow up with the details you requested \
             shortly.\n\n\
             Kind regards,\nThe Clinic Front Desk",
            sender_name, subject
        ))
    }
}
