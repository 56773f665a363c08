use super::provider_trait::PaymentProvider;
use crate::core::{AppError, Result};
use crate::modules::billing::models::{
    CreateCustomerRequest, Customer, NewSubscription, Subscription, WebhookEvent,
};
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Signature header value the mock accepts unless told otherwise
pub const MOCK_SIGNATURE: &str = "t=0,v1=mock";

/// One call observed by [`MockPaymentProvider`], in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    CreateCustomer {
        email: String,
        payment_method: String,
    },
    CreateSubscription {
        customer_id: String,
        plan_id: String,
        expand: Vec<String>,
    },
    RetrieveSubscription {
        subscription_id: String,
    },
    VerifyWebhook {
        signature: String,
    },
}

/// In-memory payment provider that records every call
///
/// Created subscriptions are kept so they can be retrieved later. Failure
/// switches make the matching call return a gateway error.
#[derive(Clone)]
pub struct MockPaymentProvider {
    pub calls: Arc<Mutex<Vec<ProviderCall>>>,
    subscriptions: Arc<Mutex<HashMap<String, Subscription>>>,
    sequence: Arc<AtomicU64>,
    accepted_signature: String,
    fail_customer_creation: bool,
    fail_subscription_creation: bool,
}

impl Default for MockPaymentProvider {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            subscriptions: Arc::new(Mutex::new(HashMap::new())),
            sequence: Arc::new(AtomicU64::new(0)),
            accepted_signature: MOCK_SIGNATURE.to_string(),
            fail_customer_creation: false,
            fail_subscription_creation: false,
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockPaymentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_customer_creation(mut self) -> Self {
        self.fail_customer_creation = true;
        self
    }

    pub fn failing_subscription_creation(mut self) -> Self {
        self.fail_subscription_creation = true;
        self
    }

    pub fn with_accepted_signature(mut self, signature: impl Into<String>) -> Self {
        self.accepted_signature = signature.into();
        self
    }

    /// Seed a subscription so it can be retrieved without creating it first
    pub fn with_subscription(self, id: &str, customer_id: &str, plan_id: &str) -> Self {
        let subscription = subscription_object(id, customer_id, plan_id, false);
        lock(&self.subscriptions).insert(id.to_string(), subscription);
        self
    }

    /// Snapshot of all recorded calls
    pub fn recorded_calls(&self) -> Vec<ProviderCall> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: ProviderCall) {
        lock(&self.calls).push(call);
    }

    fn next_id(&self, prefix: &str) -> String {
        let n = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}_mock_{}", prefix, n)
    }
}

fn subscription_object(id: &str, customer_id: &str, plan_id: &str, expanded: bool) -> Subscription {
    let latest_invoice = if expanded {
        json!({
            "object": "invoice",
            "payment_intent": { "object": "payment_intent", "status": "succeeded" }
        })
    } else {
        json!(format!("in_{}", id))
    };

    Subscription {
        id: id.to_string(),
        status: "active".to_string(),
        object: json!({
            "id": id,
            "object": "subscription",
            "customer": customer_id,
            "status": "active",
            "items": {
                "object": "list",
                "data": [{ "object": "subscription_item", "plan": { "id": plan_id } }]
            },
            "latest_invoice": latest_invoice,
        }),
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_customer(&self, request: &CreateCustomerRequest) -> Result<Customer> {
        self.record(ProviderCall::CreateCustomer {
            email: request.email.clone(),
            payment_method: request.payment_method.clone(),
        });

        if self.fail_customer_creation {
            return Err(AppError::gateway("Stripe API error: card_declined"));
        }

        Ok(Customer {
            id: self.next_id("cus"),
        })
    }

    async fn create_subscription(&self, request: &NewSubscription) -> Result<Subscription> {
        self.record(ProviderCall::CreateSubscription {
            customer_id: request.customer_id.clone(),
            plan_id: request.plan_id.clone(),
            expand: request.expand.clone(),
        });

        if self.fail_subscription_creation {
            return Err(AppError::gateway("Stripe API error: No such plan"));
        }

        let id = self.next_id("sub");
        let expanded = request
            .expand
            .iter()
            .any(|path| path == "latest_invoice.payment_intent");
        let subscription =
            subscription_object(&id, &request.customer_id, &request.plan_id, expanded);

        lock(&self.subscriptions).insert(id, subscription.clone());
        Ok(subscription)
    }

    async fn retrieve_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        self.record(ProviderCall::RetrieveSubscription {
            subscription_id: subscription_id.to_string(),
        });

        lock(&self.subscriptions)
            .get(subscription_id)
            .cloned()
            .ok_or_else(|| {
                AppError::gateway(format!(
                    "Stripe API error: No such subscription: '{}'",
                    subscription_id
                ))
            })
    }

    fn verify_webhook(&self, payload: &str, signature: &str) -> Result<WebhookEvent> {
        self.record(ProviderCall::VerifyWebhook {
            signature: signature.to_string(),
        });

        if signature != self.accepted_signature {
            return Err(AppError::signature(
                "No signatures found matching the expected signature for payload",
            ));
        }

        WebhookEvent::from_json(payload)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
