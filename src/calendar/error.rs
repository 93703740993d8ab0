use thiserror::Error;

/// Failure talking to the events backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server answered {status}{}", suffix(.message))]
    Server { status: u16, message: Option<String> },

    #[error("response was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid session cookie: {0}")]
    InvalidCookie(#[from] reqwest::header::InvalidHeaderValue),
}

fn suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Text for a toast: the server's own message when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
