//! Core library for the `cityweather` lookup.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - Input validation and the OpenWeather fetcher
//! - The widget reducer that turns a query and a response into UI state
//! - Glyph selection and display formatting
//!
//! It is used by `cityweather-cli`, but can also back other front ends.

pub mod config;
pub mod error;
pub mod glyph;
pub mod model;
pub mod provider;
pub mod validate;
pub mod view;
pub mod widget;

pub use config::{ApiKey, Config};
pub use error::{FailureKind, LookupError};
pub use glyph::{Glyph, glyph_for};
pub use model::{Condition, CurrentResult, Failure, WeatherReport};
pub use provider::{OpenWeatherProvider, WeatherProvider, provider_from_config};
pub use view::ReportView;
pub use widget::{Submit, Widget, WidgetState};
