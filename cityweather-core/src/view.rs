//! Display strings for a [`WeatherReport`].

use chrono::NaiveDate;

use crate::{
    glyph::{Glyph, glyph_for},
    model::WeatherReport,
};

/// Pre-formatted fields, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub heading: String,
    pub glyph: Glyph,
    pub description: String,
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
}

impl From<&WeatherReport> for ReportView {
    fn from(report: &WeatherReport) -> Self {
        let heading = if report.country.is_empty() {
            report.location.clone()
        } else {
            format!("{}, {}", report.location, report.country)
        };

        Self {
            heading,
            glyph: glyph_for(Some(&report.category)),
            description: report.description.clone(),
            temperature: format!("{}°C", round_half_up(report.temperature_c)),
            humidity: format!("{}%", report.humidity_pct),
            wind: format!("{} km/h", report.wind_speed),
            pressure: format!("{} hPa", report.pressure_hpa),
        }
    }
}

/// Halves round towards positive infinity, so 15.5 -> 16 and -2.5 -> -2.
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// Long-form date line, e.g. "Sunday, October 18, 2026".
pub fn date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
