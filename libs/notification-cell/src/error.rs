use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Drafting credentials missing: {0}")]
    MissingCredentials(String),

    #[error("Language model request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected completion payload: {0}")]
    MalformedResponse(String),
}
