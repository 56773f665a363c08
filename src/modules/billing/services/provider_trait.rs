use crate::core::Result;
use crate::modules::billing::models::{
    CreateCustomerRequest, Customer, NewSubscription, Subscription, WebhookEvent,
};
use async_trait::async_trait;

/// Payment provider operations the gateway depends on
///
/// Every call maps to exactly one request against the provider. Implementations
/// must not retry and must not create resources other than the one requested.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a customer, attach the payment method and make it the default
    /// for invoices
    async fn create_customer(&self, request: &CreateCustomerRequest) -> Result<Customer>;

    /// Create a subscription for an existing customer
    async fn create_subscription(&self, request: &NewSubscription) -> Result<Subscription>;

    /// Fetch a subscription by id
    async fn retrieve_subscription(&self, subscription_id: &str) -> Result<Subscription>;

    /// Check `payload` against the `Stripe-Signature` header value and parse
    /// the event
    ///
    /// Returns `AppError::Signature` when the payload cannot be trusted.
    fn verify_webhook(&self, payload: &str, signature: &str) -> Result<WebhookEvent>;

    /// Provider name for logs
    fn name(&self) -> &str;
}
