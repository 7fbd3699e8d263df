//! Tests for the tiny_http routing layer
//!
//! Routing is exercised through `route`, which takes the method, URL and
//! body directly so no socket is needed.

use bunkcalc::config::Config;
use bunkcalc::server::{Reply, route};
use tiny_http::Method;

fn get(url: &str) -> Reply {
    route(&Method::Get, url, "", &Config::default())
}

fn post(url: &str, body: &str) -> Reply {
    route(&Method::Post, url, body, &Config::default())
}

fn json(reply: &Reply) -> serde_json::Value {
    serde_json::from_slice(&reply.body).unwrap()
}

#[test]
fn test_index_page() {
    let reply = get("/");
    assert_eq!(reply.status, 200);
    assert!(reply.content_type.starts_with("text/html"));
    assert!(reply.text().contains("id=\"percentage\""));
}

#[test]
fn test_static_asset_with_query_string() {
    let reply = get("/app.js?v=1");
    assert_eq!(reply.status, 200);
    assert!(reply.text().contains("/api/evaluate"));
}

#[test]
fn test_unknown_page_is_404() {
    let reply = get("/nope");
    assert_eq!(reply.status, 404);
}

#[test]
fn test_options_endpoint() {
    let reply = get("/api/options");
    assert_eq!(reply.status, 200);
    let body = json(&reply);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["default"], 75);
}

#[test]
fn test_versioned_prefix() {
    assert_eq!(get("/api/v1/options").status, 200);
}

#[test]
fn test_evaluate_success() {
    let reply = post("/api/evaluate", r#"{"present": "40", "total": "50", "required": "75"}"#);
    assert_eq!(reply.status, 200);
    let body = json(&reply);
    assert_eq!(body["data"]["status"], "success");
    assert_eq!(body["data"]["lines"][1], "Current Attendance: 40/50 → 80.00%");
}

#[test]
fn test_evaluate_validation_failure() {
    let reply = post("/api/evaluate", r#"{"present": "", "total": "50"}"#);
    assert_eq!(reply.status, 400);
    let body = json(&reply);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(body["error"]["message"], "Please enter valid numbers for both fields.");
}

#[test]
fn test_evaluate_bad_json() {
    let reply = post("/api/evaluate", "{not json");
    assert_eq!(reply.status, 400);
    assert!(json(&reply)["error"]["message"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[test]
fn test_validate_endpoint() {
    let reply = post("/api/validate", r#"{"present": "7", "total": "5"}"#);
    assert_eq!(reply.status, 200);
    assert_eq!(json(&reply)["data"]["present_exceeds_total"], true);
}

#[test]
fn test_wrong_method_is_404() {
    let reply = get("/api/evaluate");
    assert_eq!(reply.status, 404);
    assert_eq!(json(&reply)["error"]["code"], "NOT_FOUND");
}
