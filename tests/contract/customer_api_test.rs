//! Contract tests for POST /create-customer

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::Value;
use subscription_gateway::billing::{MockPaymentProvider, ProviderCall};

#[actix_web::test]
async fn test_create_customer_returns_subscription() {
    let mock = MockPaymentProvider::new();
    let srv = spawn_test_server(billing_state(mock.clone())).await;

    let mut response = srv
        .post("/create-customer")
        .send_json(&TestDataFactory::create_customer_payload(
            "pm_card_visa",
            "a@b.com",
        ))
        .await
        .unwrap();

    assert_ok(&response);
    assert_json_content_type(&response);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["object"], "subscription");
    assert_eq!(body["items"]["data"][0]["plan"]["id"], TEST_PLAN_ID);
    assert_eq!(
        body["latest_invoice"]["payment_intent"]["object"],
        "payment_intent"
    );

    let calls = mock.recorded_calls();
    assert_eq!(calls.len(), 2, "customer then subscription, nothing else");
    assert_eq!(
        calls[0],
        ProviderCall::CreateCustomer {
            email: "a@b.com".to_string(),
            payment_method: "pm_card_visa".to_string(),
        }
    );
    assert_eq!(
        calls[1],
        ProviderCall::CreateSubscription {
            customer_id: body["customer"].as_str().unwrap().to_string(),
            plan_id: TEST_PLAN_ID.to_string(),
            expand: vec!["latest_invoice.payment_intent".to_string()],
        }
    );
}

#[actix_web::test]
async fn test_missing_field_is_bad_request() {
    let mock = MockPaymentProvider::new();
    let srv = spawn_test_server(billing_state(mock.clone())).await;

    let mut response = srv
        .post("/create-customer")
        .send_json(&serde_json::json!({ "email": "a@b.com" }))
        .await
        .unwrap();

    assert_bad_request(&response);
    let body: Value = response.json().await.unwrap();
    assert_error_body(&body, 400);
    assert!(mock.recorded_calls().is_empty());
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let mock = MockPaymentProvider::new();
    let srv = spawn_test_server(billing_state(mock.clone())).await;

    let response = srv
        .post("/create-customer")
        .insert_header(("Content-Type", "application/json"))
        .send_body("{\"payment_method\": ")
        .await
        .unwrap();

    assert_bad_request(&response);
    assert!(mock.recorded_calls().is_empty());
}

#[actix_web::test]
async fn test_blank_email_is_bad_request() {
    let mock = MockPaymentProvider::new();
    let srv = spawn_test_server(billing_state(mock.clone())).await;

    let response = srv
        .post("/create-customer")
        .send_json(&TestDataFactory::create_customer_payload("pm_card_visa", ""))
        .await
        .unwrap();

    assert_bad_request(&response);
    assert!(mock.recorded_calls().is_empty());
}

#[actix_web::test]
async fn test_customer_failure_is_bad_gateway_without_subscription() {
    let mock = MockPaymentProvider::new().failing_customer_creation();
    let srv = spawn_test_server(billing_state(mock.clone())).await;

    let mut response = srv
        .post("/create-customer")
        .send_json(&TestDataFactory::create_customer_payload(
            "pm_card_chargeDeclined",
            "a@b.com",
        ))
        .await
        .unwrap();

    assert_bad_gateway(&response);
    let body: Value = response.json().await.unwrap();
    assert_error_body(&body, 502);

    let calls = mock.recorded_calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], ProviderCall::CreateCustomer { .. }));
}

#[actix_web::test]
async fn test_subscription_failure_is_bad_gateway() {
    let mock = MockPaymentProvider::new().failing_subscription_creation();
    let srv = spawn_test_server(billing_state(mock.clone())).await;

    let response = srv
        .post("/create-customer")
        .send_json(&TestDataFactory::create_customer_payload(
            "pm_card_visa",
            "a@b.com",
        ))
        .await
        .unwrap();

    assert_bad_gateway(&response);
    assert_eq!(mock.recorded_calls().len(), 2);
}
