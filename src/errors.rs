use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::workflow::DeliveryStatus;

/// Error body returned by the backend.
///
/// The backend answers with either a plain `{ "message": ... }` object or an
/// RFC 7807 style problem document carrying `title` and a per-field `errors`
/// map. Every field is optional so that either shape decodes.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
    /// Problem-details title
    #[serde(default)]
    pub title: Option<String>,
    /// Field name to list of validation messages
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorResponse {
    /// Picks the message to show from the payload.
    ///
    /// Order: `message`, then `title`, then the first field error.
    pub fn best_message(&self) -> Option<String> {
        non_blank(self.message.as_deref())
            .or_else(|| non_blank(self.title.as_deref()))
            .or_else(|| {
                self.errors
                    .as_ref()
                    .into_iter()
                    .flat_map(|errors| errors.values().flat_map(|msgs| msgs.iter()))
                    .find_map(|msg| non_blank(Some(msg.as_str())))
            })
    }

    /// Parses a raw response body, tolerating empty and non-JSON bodies.
    pub fn parse(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<ErrorResponse>(trimmed) {
            Ok(parsed) => parsed,
            // Some endpoints answer with a bare JSON string or plain text.
            Err(_) => match serde_json::from_str::<String>(trimmed) {
                Ok(text) => Self {
                    message: Some(text),
                    ..Self::default()
                },
                Err(_) => Self {
                    message: Some(trimmed.to_string()),
                    ..Self::default()
                },
            },
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Session expired")]
    SessionExpired,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: DeliveryStatus,
        to: DeliveryStatus,
    },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        ClientError::Validation(
            crate::forms::first_message(&err).unwrap_or_else(|| err.to_string()),
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::Config(format!("invalid URL: {}", err))
    }
}

impl From<crate::workflow::StageError> for ClientError {
    fn from(err: crate::workflow::StageError) -> Self {
        ClientError::InvalidOperation(err.to_string())
    }
}

impl From<crate::config::AppConfigError> for ClientError {
    fn from(err: crate::config::AppConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}

impl ClientError {
    /// Classifies a non-success response by status code.
    ///
    /// This is the single source of truth for status-to-error mapping.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let payload = ErrorResponse::parse(body);
        let message = payload.best_message();
        let or_reason = |message: Option<String>| {
            message.unwrap_or_else(|| status.canonical_reason().unwrap_or("Error").to_string())
        };

        match status {
            StatusCode::BAD_REQUEST => ClientError::Validation(or_reason(message)),
            StatusCode::UNAUTHORIZED => ClientError::SessionExpired,
            StatusCode::FORBIDDEN => ClientError::Forbidden(or_reason(message)),
            StatusCode::NOT_FOUND => ClientError::NotFound(or_reason(message)),
            StatusCode::CONFLICT => ClientError::Conflict(or_reason(message)),
            s if s.is_server_error() => ClientError::Server {
                status: s.as_u16(),
                message: or_reason(message),
            },
            s => ClientError::UnexpectedStatus {
                status: s.as_u16(),
                message: or_reason(message),
            },
        }
    }

    /// Returns the HTTP status this error was classified from, if any.
    pub fn status_code(&self) -> Option<StatusCode> {
        let code = match self {
            Self::Validation(_) => 400,
            Self::SessionExpired => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => *status,
            _ => return None,
        };
        StatusCode::from_u16(code).ok()
    }

    /// One-shot alert text for the user.
    ///
    /// Transport and decoding details stay in the logs; only validation and
    /// conflict messages from the backend are shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::SessionExpired => "Your session has expired. Please sign in again.".to_string(),
            Self::Forbidden(_) => "You do not have permission to perform this action.".to_string(),
            Self::NotFound(_) => "The requested item could not be found.".to_string(),
            Self::Conflict(msg) => format!(
                "This item was changed by someone else. Refresh and try again. ({})",
                msg
            ),
            Self::Server { .. } => "The server ran into a problem. Please try again later.".to_string(),
            Self::UnexpectedStatus { status, .. } => {
                format!("The server returned an unexpected response ({}).", status)
            }
            Self::Network(_) => {
                "Cannot reach the server. Check your connection and try again.".to_string()
            }
            Self::Timeout => "The server took too long to respond. Please try again.".to_string(),
            Self::Decode(_) => "The server sent a response this app could not read.".to_string(),
            Self::InvalidTransition { from, to } => {
                format!("A shipment cannot move from {} to {}.", from, to)
            }
            Self::InvalidOperation(msg) => msg.clone(),
            Self::Config(msg) => format!("Client is misconfigured: {}", msg),
        }
    }

    /// Whether offering a manual "retry" makes sense for this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout | Self::Server { .. })
    }
}
