//! Tests for the remote time-series client against a local stand-in provider.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use parking_lot::Mutex;
use serde_json::{Value, json};

use salary_inflation::cpi::{BlsClient, SeriesSource};
use salary_inflation::error::EngineError;
use salary_inflation::models::Period;

const SERIES_ID: &str = "CUUR0000SA0";

#[derive(Clone, Copy)]
enum Behaviour {
    Succeed,
    NotProcessed,
    ServerError,
    Garbage,
    Stall,
}

#[derive(Clone)]
struct Provider {
    behaviour: Behaviour,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn timeseries(State(provider): State<Provider>, Json(body): Json<Value>) -> Response {
    provider.received.lock().push(body);

    match provider.behaviour {
        Behaviour::Succeed => Json(json!({
            "status": "REQUEST_SUCCEEDED",
            "responseTime": 87,
            "message": [],
            "Results": {
                "series": [{
                    "seriesID": SERIES_ID,
                    "data": [
                        { "year": "2024", "period": "M13", "periodName": "Annual", "value": "313.689", "footnotes": [{}] },
                        { "year": "2024", "period": "M12", "periodName": "December", "value": "315.605", "latest": "true", "footnotes": [{}] },
                        { "year": "2023", "period": "M13", "periodName": "Annual", "value": "304.702", "footnotes": [{}] }
                    ]
                }]
            }
        }))
        .into_response(),
        Behaviour::NotProcessed => Json(json!({
            "status": "REQUEST_NOT_PROCESSED",
            "responseTime": 12,
            "message": ["Daily threshold for total number of requests allocated per user has been reached."],
            "Results": {}
        }))
        .into_response(),
        Behaviour::ServerError => (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response(),
        Behaviour::Garbage => (
            StatusCode::OK,
            [("content-type", "application/json")],
            "<html>not json</html>",
        )
            .into_response(),
        Behaviour::Stall => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::OK.into_response()
        }
    }
}

async fn spawn_provider(behaviour: Behaviour) -> (String, Arc<Mutex<Vec<Value>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/publicAPI/v2/timeseries/data/", post(timeseries))
        .with_state(Provider {
            behaviour,
            received: received.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (
        format!("http://{}/publicAPI/v2/timeseries/data/", addr),
        received,
    )
}

fn client(url: &str, registration_key: Option<&str>) -> BlsClient {
    BlsClient::with_endpoint(
        url,
        SERIES_ID,
        registration_key.map(str::to_string),
        Duration::from_millis(500),
    )
}

fn expect_fetch_error(result: Result<impl std::fmt::Debug, EngineError>) -> String {
    match result {
        Err(EngineError::SeriesFetch { series_id, message }) => {
            assert_eq!(series_id, SERIES_ID);
            message
        }
        other => panic!("Expected SeriesFetch error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_successful_fetch_returns_payload() {
    let (url, received) = spawn_provider(Behaviour::Succeed).await;

    let payload = client(&url, None).fetch(2016, 2024).await.unwrap();

    assert!(payload.is_success());
    let series = payload.first_series().unwrap();
    assert_eq!(series.series_id, SERIES_ID);
    assert_eq!(series.data.len(), 3);
    assert_eq!(
        salary_inflation::cpi::extract_value(&payload, 2024, Period::Month(12)),
        Some(315.605)
    );
    assert_eq!(payload.extra["responseTime"], 87);

    let requests = received.lock();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        json!({
            "seriesid": [SERIES_ID],
            "startyear": "2016",
            "endyear": "2024",
            "annualaverage": true
        })
    );
}

#[tokio::test]
async fn test_registration_key_is_sent_when_configured() {
    let (url, received) = spawn_provider(Behaviour::Succeed).await;

    client(&url, Some("abc123")).fetch(2020, 2024).await.unwrap();

    assert_eq!(received.lock()[0]["registrationkey"], "abc123");
}

#[tokio::test]
async fn test_non_success_status_is_fetch_error() {
    let (url, _) = spawn_provider(Behaviour::NotProcessed).await;

    let message = expect_fetch_error(client(&url, None).fetch(2020, 2024).await);

    assert!(message.contains("REQUEST_NOT_PROCESSED"), "{}", message);
    assert!(message.contains("Daily threshold"), "{}", message);
}

#[tokio::test]
async fn test_http_error_status_is_fetch_error() {
    let (url, _) = spawn_provider(Behaviour::ServerError).await;

    let message = expect_fetch_error(client(&url, None).fetch(2020, 2024).await);

    assert!(message.contains("503"), "{}", message);
}

#[tokio::test]
async fn test_malformed_body_is_fetch_error() {
    let (url, _) = spawn_provider(Behaviour::Garbage).await;

    let message = expect_fetch_error(client(&url, None).fetch(2020, 2024).await);

    assert!(message.starts_with("malformed payload"), "{}", message);
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let (url, _) = spawn_provider(Behaviour::Stall).await;

    let message = expect_fetch_error(client(&url, None).fetch(2020, 2024).await);

    assert_eq!(message, "request timed out");
}
