use thiserror::Error;

use crate::config::API_KEY_ENV;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a city name.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while fetching the weather. Please try again.";

/// Everything that can stop a lookup from producing a report.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("empty city name")]
    EmptyQuery,

    #[error("no API key configured (set WEATHER_API_KEY or run `cityweather configure`)")]
    MissingCredential,

    #[error("request to weather service failed: {0}")]
    Transport(String),

    #[error("weather service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse weather response: {0}")]
    Parse(String),

    #[error("weather response contained no conditions")]
    NoConditions,

    #[error("weather service returned error {code}: {message}")]
    Api { code: u16, message: String },
}

/// Coarse classification of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Validation,
    Configuration,
    Transport,
    Application,
}

impl LookupError {
    pub fn kind(&self) -> FailureKind {
        match self {
            LookupError::EmptyQuery => FailureKind::Validation,
            LookupError::MissingCredential => FailureKind::Configuration,
            LookupError::Transport(_)
            | LookupError::Status { .. }
            | LookupError::Parse(_)
            | LookupError::NoConditions => FailureKind::Transport,
            LookupError::Api { .. } => FailureKind::Application,
        }
    }

    /// Short message shown in place of a report.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::EmptyQuery => EMPTY_QUERY_MESSAGE.to_string(),
            LookupError::MissingCredential => format!(
                "API key is missing. Please set the {API_KEY_ENV} environment variable."
            ),
            LookupError::Api { message, .. } if !message.trim().is_empty() => {
                capitalize(message.trim())
            }
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
