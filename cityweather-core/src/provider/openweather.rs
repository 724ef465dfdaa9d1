use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{
    config::ApiKey,
    error::LookupError,
    model::{Condition, WeatherReport},
};

use super::WeatherProvider;

/// Client for the OpenWeather "current weather by city name" endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/weather?q={city}&appid={key}&units=metric`, form-escaped.
    pub fn request_url(&self, city: &str, api_key: &ApiKey) -> Result<Url, LookupError> {
        let endpoint = format!("{}/weather", self.base_url);

        Url::parse_with_params(
            &endpoint,
            &[("q", city), ("appid", api_key.as_str()), ("units", "metric")],
        )
        .map_err(|e| LookupError::Transport(format!("invalid endpoint {endpoint}: {e}")))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str, api_key: &ApiKey) -> Result<WeatherReport, LookupError> {
        let url = self.request_url(city, api_key)?;
        debug!(city, endpoint = %format!("{}/weather", self.base_url), "requesting current weather");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.without_url().to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| LookupError::Transport(format!("failed to read response body: {e}")))?;

        debug!(status = status.as_u16(), bytes = body.len(), "received OpenWeather response");

        parse_current(status.as_u16(), &body)
    }
}

/// Classify a raw response. Error envelopes take precedence over the report shape.
fn parse_current(status: u16, body: &str) -> Result<WeatherReport, LookupError> {
    let envelope = serde_json::from_str::<OwEnvelope>(body).ok();

    if !(200..300).contains(&status) {
        return Err(match envelope {
            Some(OwEnvelope { cod, message: Some(message) }) => LookupError::Api {
                code: cod.as_ref().and_then(OwCode::as_u16).unwrap_or(status),
                message,
            },
            _ => LookupError::Status { status, body: truncate_body(body) },
        });
    }

    if let Some(OwEnvelope { cod: Some(cod), message }) = envelope {
        match cod.as_u16() {
            Some(200) | None => {}
            Some(code) => {
                return Err(LookupError::Api { code, message: message.unwrap_or_default() });
            }
        }
    }

    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    WeatherReport::try_from(parsed)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OwCode {
    Number(u16),
    Text(String),
}

impl OwCode {
    fn as_u16(&self) -> Option<u16> {
        match self {
            OwCode::Number(n) => Some(*n),
            OwCode::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Fields present on both success and error bodies.
#[derive(Debug, Deserialize)]
struct OwEnvelope {
    cod: Option<OwCode>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    #[serde(default)]
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl TryFrom<OwCurrentResponse> for WeatherReport {
    type Error = LookupError;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self, Self::Error> {
        let first = parsed.weather.first().ok_or(LookupError::NoConditions)?;

        let category = first.main.to_lowercase();
        let description = first.description.clone();

        let conditions = parsed
            .weather
            .into_iter()
            .map(|w| Condition { main: w.main, description: w.description })
            .collect();

        Ok(WeatherReport {
            location: parsed.name,
            country: parsed.sys.country,
            category,
            description,
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_speed: parsed.wind.speed,
            pressure_hpa: parsed.main.pressure,
            conditions,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
