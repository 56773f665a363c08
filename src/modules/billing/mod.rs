pub mod controllers;
pub mod models;
pub mod services;

use std::sync::Arc;

use crate::config::StripeConfig;

pub use controllers::configure;
pub use models::{
    CreateCustomerRequest, Customer, NewSubscription, RetrieveSubscriptionRequest, Subscription,
    WebhookEvent, WebhookOutcome,
};
pub use services::{
    MockPaymentProvider, PaymentProvider, ProviderCall, StripeProvider, SubscriptionService,
    WebhookHandler,
};

/// Shared, read-only state behind the billing routes
#[derive(Clone)]
pub struct BillingState {
    pub publishable_key: String,
    pub subscriptions: Arc<SubscriptionService>,
    pub webhooks: Arc<WebhookHandler>,
}

impl BillingState {
    /// Wire services around a provider using the Stripe settings
    pub fn new(provider: Arc<dyn PaymentProvider>, config: &StripeConfig) -> Self {
        Self {
            publishable_key: config.publishable_key.clone(),
            subscriptions: Arc::new(SubscriptionService::new(
                provider.clone(),
                config.plan_id.clone(),
            )),
            webhooks: Arc::new(WebhookHandler::new(provider, config.unhandled_events)),
        }
    }
}
