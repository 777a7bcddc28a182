use std::env;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{header, Client};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::NotificationError;
use crate::services::drafter::EmailDrafter;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";

/// Language-model-backed drafter calling the OpenAI chat completions
/// API. Prompts carry only the appointment facts handed over by the
/// engine; the model is instructed not to invent details.
pub struct OpenAiDrafter {
    api_key: String,
    model: String,
    endpoint: String,
    http_client: Client,
}

impl OpenAiDrafter {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http_client: Client::new(),
        }
    }

    pub fn from_env() -> Result<Self, NotificationError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            NotificationError::MissingCredentials(
                "OPENAI_API_KEY environment variable not set".to_string(),
            )
        })?;
        Ok(Self::new(api_key))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, NotificationError> {
        let prompt = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt
                },
                {
                    "role": "user",
                    "content": user_prompt
                }
            ],
            "temperature": 0.5
        });

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&prompt)
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        let text = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| NotificationError::MalformedResponse(body.to_string()))?;

        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl EmailDrafter for OpenAiDrafter {
    async fn draft_cancellation_notice(
        &self,
        requester_name: &str,
        date: NaiveDate,
        time_range: &str,
        provider_name: &str,
    ) -> Result<String, NotificationError> {
        debug!("Drafting cancellation notice for {}", requester_name);

        let user_prompt = format!(
            "Write a cancellation email for this appointment.\n\
             Patient name: {}\nDate: {}\nTime: {}\nClinician: {}",
            requester_name, date, time_range, provider_name
        );

        self.complete(
            "You are a clinic front-desk assistant. Write a brief, empathetic \
             email informing a patient that their appointment has been cancelled, \
             and invite them to contact the office to rebook. Do not invent \
             details that were not provided.",
            &user_prompt,
        )
        .await
    }

    async fn draft_reply(
        &self,
        sender_name: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, NotificationError> {
        debug!("Drafting reply to {} ({})", sender_name, subject);

        let user_prompt = format!(
            "Draft a reply to this email.\nFrom: {}\nSubject: {}\n\n{}",
            sender_name, subject, body
        );

        self.complete(
            "You are a clinic front-desk assistant responding to patient emails. \
             Write a courteous, professional reply. Do not promise anything the \
             clinic has not confirmed, and do not include medical advice.",
            &user_prompt,
        )
        .await
    }
}
