//! Integration tests for the API endpoints against a mock gas oracle

use actix_web::{
    test, web, App,
    http::StatusCode,
};
use serde_json::json;
use std::time::Duration;
use tracing_actix_web::TracingLogger;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

use crypto_gas_tracker::api;

mod helpers;
use helpers::{fetcher_for, unreachable_fetcher};

fn oracle_success() -> serde_json::Value {
    json!({
        "status": "1",
        "message": "OK",
        "result": {
            "LastBlock": "19361537",
            "SafeGasPrice": "10",
            "ProposeGasPrice": "15",
            "FastGasPrice": "20",
            "suggestBaseFee": "9.684",
            "gasUsedRatio": "0.4512,0.6204,0.3817,0.5102,0.4889"
        }
    })
}

#[actix_web::test]
async fn test_gas_fee_endpoint() {
    // Start the mock oracle and expect a single gas oracle query for Ethereum.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ethereum"))
        .and(query_param("module", "gastracker"))
        .and(query_param("action", "gasoracle"))
        .and(query_param("apikey", "eth-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(oracle_success()))
        .expect(1)
        .mount(&server)
        .await;

    let app = test::init_service(
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(fetcher_for(&server, Duration::from_secs(5))))
            .configure(api::configure)
    ).await;

    let req = test::TestRequest::get()
        .uri("/gas/ethereum")
        .to_request();

    let resp = test::call_service(&app, req).await;

    // Verify a successful response.
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let response: serde_json::Value = serde_json::from_slice(&body)
        .expect("Failed to parse JSON response");

    // The oracle result is passed through untouched.
    assert_eq!(response["network"], "ethereum");
    assert_eq!(response["gasFee"], oracle_success()["result"]);
}

#[actix_web::test]
async fn test_unsupported_network_skips_oracle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(oracle_success()))
        .expect(0)
        .mount(&server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(fetcher_for(&server, Duration::from_secs(5))))
            .configure(api::configure)
    ).await;

    let req = test::TestRequest::get()
        .uri("/gas/unknown")
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&body).unwrap(),
        json!({"error": "Unsupported network"})
    );
}

#[actix_web::test]
async fn test_invalid_api_key_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bsc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Invalid API Key"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(fetcher_for(&server, Duration::from_secs(5))))
            .configure(api::configure)
    ).await;

    let req = test::TestRequest::get()
        .uri("/gas/bsc")
        .to_request();

    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = test::read_body(resp).await;
    let response: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(response["error"], "Failed to fetch gas fee");
    assert_eq!(response["error_code"], "ORACLE_ERROR");
    assert!(response["details"].as_str().unwrap().contains("Invalid API Key"));
}

#[actix_web::test]
async fn test_oracle_http_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(fetcher_for(&server, Duration::from_secs(5))))
            .configure(api::configure)
    ).await;

    let req = test::TestRequest::get()
        .uri("/gas/ethereum")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[actix_web::test]
async fn test_slow_oracle_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(oracle_success())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(fetcher_for(&server, Duration::from_secs(1))))
            .configure(api::configure)
    ).await;

    let req = test::TestRequest::get()
        .uri("/gas/ethereum")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[actix_web::test]
async fn test_unreachable_oracle_is_bad_gateway() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(unreachable_fetcher()))
            .configure(api::configure)
    ).await;

    let req = test::TestRequest::get()
        .uri("/gas/bsc")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = test::read_body(resp).await;
    let response: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(response["error_code"], "ORACLE_UNREACHABLE");
}
