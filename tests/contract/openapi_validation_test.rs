//! Checks the published OpenAPI contract stays in line with the router

use serde_yaml::Value;

const OPENAPI: &str = include_str!("../../specs/001-subscription-gateway/contracts/openapi.yaml");

fn document() -> Value {
    serde_yaml::from_str(OPENAPI).expect("openapi.yaml should be valid YAML")
}

#[test]
fn test_openapi_document_version() {
    let doc = document();
    let version = doc["openapi"].as_str().expect("openapi version string");
    assert!(version.starts_with("3."), "unexpected version {}", version);
}

#[test]
fn test_all_routes_are_documented() {
    let doc = document();
    let paths = &doc["paths"];

    for (path, method) in [
        ("/health", "get"),
        ("/public-key", "get"),
        ("/create-customer", "post"),
        ("/subscription", "post"),
        ("/webhook", "post"),
    ] {
        assert!(
            !paths[path][method].is_null(),
            "{} {} missing from contract",
            method.to_uppercase(),
            path
        );
    }
}

#[test]
fn test_public_key_schema_uses_camel_case() {
    let doc = document();
    let schema = &doc["components"]["schemas"]["PublicKeyResponse"];
    assert!(!schema["properties"]["publicKey"].is_null());
}

#[test]
fn test_subscription_request_uses_camel_case() {
    let doc = document();
    let schema = &doc["components"]["schemas"]["RetrieveSubscriptionRequest"];
    let required = schema["required"].as_sequence().expect("required list");
    assert!(required.iter().any(|v| v.as_str() == Some("subscriptionId")));
}

#[test]
fn test_create_customer_documents_gateway_failure() {
    let doc = document();
    let responses = &doc["paths"]["/create-customer"]["post"]["responses"];
    for code in ["200", "400", "502"] {
        assert!(!responses[code].is_null(), "missing {} response", code);
    }
}

#[test]
fn test_webhook_requires_signature_header() {
    let doc = document();
    let params = doc["paths"]["/webhook"]["post"]["parameters"]
        .as_sequence()
        .expect("webhook parameters");
    assert!(params
        .iter()
        .any(|p| p["name"].as_str() == Some("Stripe-Signature") && p["in"].as_str() == Some("header")));
}
