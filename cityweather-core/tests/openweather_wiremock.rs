//! OpenWeather client and widget flow against a mock HTTP server.

use std::{net::TcpListener, time::Duration};

use cityweather_core::{
    ApiKey, CurrentResult, Failure, FailureKind, LookupError, OpenWeatherProvider, ReportView, Widget,
    WeatherProvider, error::GENERIC_FAILURE_MESSAGE, glyph::Glyph,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn london_body() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "base": "stations",
        "main": {"temp": 15.6, "feels_like": 15.2, "temp_min": 14.1, "temp_max": 16.8,
                 "pressure": 1010, "humidity": 80},
        "visibility": 10000,
        "wind": {"speed": 5.1, "deg": 240},
        "clouds": {"all": 75},
        "dt": 1_700_000_000,
        "sys": {"type": 2, "id": 2075535, "country": "GB", "sunrise": 1_699_990_000, "sunset": 1_700_020_000},
        "timezone": 0,
        "id": 2643743,
        "name": "London",
        "cod": 200
    })
}

fn key() -> ApiKey {
    ApiKey::new("TEST_KEY").expect("non-empty key")
}

/// Base URL of a local port with nothing listening on it.
fn closed_port_uri() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

fn create_test_provider(mock_server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::new(&mock_server.uri(), Duration::from_secs(5))
        .expect("Failed to create provider")
}

async fn mount_weather(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Fetcher
// ============================================================================

#[tokio::test]
async fn sends_city_key_and_metric_units() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = create_test_provider(&mock_server);
    let report = provider.current_weather("London", &key()).await.expect("report");

    assert_eq!(report.location, "London");
    assert_eq!(report.country, "GB");
    assert_eq!(report.category, "rain");
    assert_eq!(report.temperature_c, 15.6);
}

#[tokio::test]
async fn city_with_spaces_is_escaped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = create_test_provider(&mock_server);
    assert!(provider.current_weather("New York", &key()).await.is_ok());
}

#[tokio::test]
async fn not_found_is_application_error() {
    let mock_server = MockServer::start().await;
    mount_weather(
        &mock_server,
        ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
    )
    .await;

    let provider = create_test_provider(&mock_server);
    let err = provider.current_weather("Atlantis", &key()).await.unwrap_err();

    assert_eq!(err.kind(), FailureKind::Application);
    assert_eq!(err.user_message(), "City not found");
}

#[tokio::test]
async fn embedded_error_code_in_ok_body_is_application_error() {
    let mock_server = MockServer::start().await;
    mount_weather(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({"cod": 401, "message": "Invalid API key."})),
    )
    .await;

    let provider = create_test_provider(&mock_server);
    let err = provider.current_weather("London", &key()).await.unwrap_err();

    assert!(matches!(err, LookupError::Api { code: 401, .. }));
}

#[tokio::test]
async fn server_error_without_envelope_is_transport_failure() {
    let mock_server = MockServer::start().await;
    mount_weather(&mock_server, ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .await;

    let provider = create_test_provider(&mock_server);
    let err = provider.current_weather("London", &key()).await.unwrap_err();

    assert!(matches!(err, LookupError::Status { status: 503, .. }));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn malformed_body_is_parse_failure() {
    let mock_server = MockServer::start().await;
    mount_weather(&mock_server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let provider = create_test_provider(&mock_server);
    let err = provider.current_weather("London", &key()).await.unwrap_err();

    assert!(matches!(err, LookupError::Parse(_)));
}

#[tokio::test]
async fn empty_weather_list_is_failure_not_panic() {
    let mock_server = MockServer::start().await;
    let mut body = london_body();
    body["weather"] = serde_json::json!([]);
    mount_weather(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let provider = create_test_provider(&mock_server);
    let err = provider.current_weather("London", &key()).await.unwrap_err();

    assert!(matches!(err, LookupError::NoConditions));
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn slow_response_times_out() {
    let mock_server = MockServer::start().await;
    mount_weather(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(london_body())
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let provider = OpenWeatherProvider::new(&mock_server.uri(), Duration::from_millis(200))
        .expect("Failed to create provider");
    let err = provider.current_weather("London", &key()).await.unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)));
}

#[tokio::test]
async fn connection_refused_is_transport_failure() {
    let provider = OpenWeatherProvider::new(&closed_port_uri(), Duration::from_secs(2))
        .expect("Failed to create provider");
    let err = provider.current_weather("London", &key()).await.unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)));
    assert!(!err.to_string().contains("TEST_KEY"));
}

// ============================================================================
// Widget flow
// ============================================================================

#[tokio::test]
async fn london_scenario_renders_expected_view() {
    let mock_server = MockServer::start().await;
    mount_weather(&mock_server, ResponseTemplate::new(200).set_body_json(london_body())).await;

    let mut widget = Widget::new(create_test_provider(&mock_server), Some(key()));
    let report = widget.lookup("London").await.report().cloned().expect("report");
    let view = ReportView::from(&report);

    assert_eq!(view.heading, "London, GB");
    assert_eq!(view.temperature, "16°C");
    assert_eq!(view.glyph, Glyph::Rain);
    assert_eq!(view.humidity, "80%");
    assert_eq!(view.wind, "5.1 km/h");
    assert_eq!(view.pressure, "1010 hPa");
    assert_eq!(widget.state().query(), "");
}

#[tokio::test]
async fn empty_query_makes_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut widget = Widget::new(create_test_provider(&mock_server), Some(key()));
    let failure = widget.lookup("").await.failure().cloned().expect("failure");

    assert_eq!(failure.message, "Please enter a city name.");
    assert!(widget.state().result().report().is_none());
}

#[tokio::test]
async fn missing_key_makes_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut widget = Widget::new(create_test_provider(&mock_server), None);
    let failure = widget.lookup("London").await.failure().cloned().expect("failure");

    assert_eq!(failure.kind, FailureKind::Configuration);
}

#[tokio::test]
async fn network_failure_clears_query_and_shows_generic_message() {
    let provider = OpenWeatherProvider::new(&closed_port_uri(), Duration::from_secs(2))
        .expect("Failed to create provider");
    let mut widget = Widget::new(provider, Some(key()));

    let result = widget.lookup("London").await.clone();

    assert_eq!(
        result,
        CurrentResult::Failure(Failure {
            kind: FailureKind::Transport,
            message: GENERIC_FAILURE_MESSAGE.to_string(),
        })
    );
    assert_eq!(widget.state().query(), "");
}

#[tokio::test]
async fn failure_after_success_discards_report() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    mount_weather(
        &mock_server,
        ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
    )
    .await;

    let mut widget = Widget::new(create_test_provider(&mock_server), Some(key()));

    widget.lookup("London").await;
    assert!(widget.state().result().report().is_some());

    let result = widget.lookup("Atlantis").await;

    assert!(result.report().is_none());
    assert_eq!(result.failure().map(|f| f.message.as_str()), Some("City not found"));
    assert_eq!(widget.state().query(), "");
}
