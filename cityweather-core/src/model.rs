use serde::{Deserialize, Serialize};

use crate::error::{FailureKind, LookupError};

/// One entry of the remote `weather` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub main: String,
    pub description: String,
}

/// Current conditions for one city, as reported by the weather service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub country: String,
    /// Lower-cased `main` of the first condition; drives glyph selection.
    pub category: String,
    pub description: String,
    /// Full precision; rounding only happens for display.
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed: f64,
    pub pressure_hpa: f64,
    /// Never empty.
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&LookupError> for Failure {
    fn from(err: &LookupError) -> Self {
        Self { kind: err.kind(), message: err.user_message() }
    }
}

/// The single "current result" slot shown by the widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CurrentResult {
    #[default]
    Empty,
    Report(WeatherReport),
    Failure(Failure),
}

impl CurrentResult {
    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            CurrentResult::Report(report) => Some(report),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            CurrentResult::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CurrentResult::Empty)
    }
}
