use thiserror::Error;

/// Everything that can go wrong between a user action and the kiosk API.
///
/// Kept `Clone` so results can ride inside iced messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KioskError {
    #[error("Server connection failed: {0}")]
    Network(String),

    #[error("{message} (HTTP {status})")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Local storage error: {0}")]
    Storage(String),
}

impl KioskError {
    pub fn validation(message: impl Into<String>) -> Self {
        KioskError::Validation(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, KioskError::Http { status: 404, .. })
    }
}

impl From<reqwest::Error> for KioskError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::error!("Decode error: {:?}", err);
            KioskError::Decode(err.to_string())
        } else {
            tracing::error!("Network error: {:?}", err);
            KioskError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for KioskError {
    fn from(err: serde_json::Error) -> Self {
        KioskError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for KioskError {
    fn from(err: std::io::Error) -> Self {
        KioskError::Storage(err.to_string())
    }
}
