// Test Assertion Helpers
//
// Provides common assertions for HTTP responses in integration tests.

use actix_web::http::StatusCode;
use awc::ClientResponse;
use serde_json::Value;

fn assert_status<S>(response: &ClientResponse<S>, expected: StatusCode) {
    let status = response.status();
    assert_eq!(
        status,
        expected,
        "Expected {} {}, got {} {}",
        expected.as_u16(),
        expected.canonical_reason().unwrap_or("Unknown"),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
}

/// Assert HTTP response is 200 OK
pub fn assert_ok<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::OK);
}

/// Assert HTTP response is 400 Bad Request
pub fn assert_bad_request<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::BAD_REQUEST);
}

/// Assert HTTP response is 404 Not Found
pub fn assert_not_found<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::NOT_FOUND);
}

/// Assert HTTP response is 502 Bad Gateway
pub fn assert_bad_gateway<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::BAD_GATEWAY);
}

/// Assert the response declares a JSON body
pub fn assert_json_content_type<S>(response: &ClientResponse<S>) {
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");
    assert!(
        content_type.starts_with("application/json"),
        "Expected application/json, got '{}'",
        content_type
    );
}

/// Assert an error body has the `{"error": {"message", "code"}}` shape
///
/// # Panics
/// If the shape is wrong or the code differs
pub fn assert_error_body(body: &Value, code: u16) {
    assert!(
        body["error"]["message"].is_string(),
        "Error body should carry a message: {}",
        body
    );
    assert_eq!(
        body["error"]["code"].as_u64(),
        Some(code as u64),
        "Unexpected error code in {}",
        body
    );
}
