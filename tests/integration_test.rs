//! End-to-end tests for catalog fetching and filtering
//!
//! Runs the real HTTP client against a mock server to cover the success,
//! failure, and empty paths, plus the fetch-then-filter flow.

use httpmock::prelude::*;
use pneu::catalog::{CatalogClient, CatalogError, spawn_fetch};
use pneu::search::ProductFilterExt;
use serde_json::json;
use std::time::Duration;

fn catalog_payload() -> serde_json::Value {
    json!([
        {
            "name": "Eco Pro",
            "image": "/images/eco-pro.png",
            "model": "EP200",
            "treadwear": 400,
            "traction": "A",
            "temperature": "B",
            "pattern": "Symmetric",
            "loadIndex": "91",
            "speedRating": "H",
            "cars": ["Civic", "Corolla"]
        },
        {
            "name": "Sport Max",
            "image": "/images/sport-max.png",
            "model": "SM500",
            "treadwear": 280,
            "traction": "AA",
            "temperature": "A",
            "pattern": "Asymmetric",
            "loadIndex": "95",
            "speedRating": "Y",
            "cars": ["Mustang"]
        }
    ])
}

fn mock_catalog(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(catalog_payload());
    })
}

#[test]
fn fetch_returns_products_in_api_order() {
    let server = MockServer::start();
    let mock = mock_catalog(&server);

    let client = CatalogClient::new(server.base_url());
    let products = client.fetch_products().unwrap();

    mock.assert();
    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Eco Pro", "Sport Max"]);
    assert_eq!(products[0].load_index, "91");
    assert_eq!(products[1].speed_rating, "Y");
}

#[test]
fn fetch_accepts_empty_catalog() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    let client = CatalogClient::new(server.base_url());
    let products = client.fetch_products().unwrap();
    assert!(products.is_empty());
}

#[test]
fn server_error_status_surfaces_as_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(500);
    });

    let client = CatalogClient::new(server.base_url());
    let err = client.fetch_products().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Status(status) if status.as_u16() == 500
    ));
}

#[test]
fn malformed_body_surfaces_as_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"not\": \"an array\"");
    });

    let client = CatalogClient::new(server.base_url());
    let err = client.fetch_products().unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)));
}

#[test]
fn unreachable_server_surfaces_as_failure() {
    // Nothing listens on this port
    let client = CatalogClient::new("http://127.0.0.1:1");
    let err = client.fetch_products().unwrap_err();
    assert!(matches!(err, CatalogError::Request(_)));
}

#[test]
fn spawned_fetch_delivers_on_the_channel() {
    let server = MockServer::start();
    mock_catalog(&server);

    let rx = spawn_fetch(CatalogClient::new(server.base_url()));
    let result = rx.recv_timeout(Duration::from_secs(10)).unwrap();

    let products = result.unwrap();
    assert_eq!(products.len(), 2);
}

#[test]
fn dropped_receiver_discards_late_result() {
    let server = MockServer::start();
    let mock = mock_catalog(&server);

    let rx = spawn_fetch(CatalogClient::new(server.base_url()));
    drop(rx);

    // The worker still completes its request and must swallow the failed
    // send instead of panicking
    for _ in 0..100 {
        if mock.hits() > 0 {
            return;
        }
        std::thread::sleep(Duration::from_millis(100));
    }
    panic!("fetch worker never reached the server");
}

#[test]
fn fetch_then_filter_scenario() {
    let server = MockServer::start();
    mock_catalog(&server);

    let client = CatalogClient::new(server.base_url());
    let products = client.fetch_products().unwrap();

    let matches = products.clone().filter_query("civic");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Eco Pro");

    // No single product matches both terms
    let matches = products.filter_query("pro max");
    assert!(matches.is_empty());
}
