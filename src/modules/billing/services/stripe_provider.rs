use super::provider_trait::PaymentProvider;
use crate::config::StripeConfig;
use crate::core::{AppError, Result};
use crate::modules::billing::models::{
    CreateCustomerRequest, Customer, NewSubscription, Subscription, WebhookEvent,
};
use async_trait::async_trait;
use std::str::FromStr;

/// Stripe implementation of [`PaymentProvider`] over `async-stripe`
///
/// Signature verification is delegated to `stripe::Webhook::construct_event`,
/// which checks the HMAC and the timestamp tolerance. Verified events are read
/// from the raw body, so types the library has no struct for still dispatch.
pub struct StripeProvider {
    client: stripe::Client,
    webhook_secret: String,
}

impl StripeProvider {
    /// Create a new Stripe provider
    ///
    /// # Arguments
    /// * `secret_key` - Stripe secret key (from STRIPE_SECRET_KEY env var)
    /// * `webhook_secret` - Webhook signing secret (from STRIPE_WEBHOOK_SECRET env var)
    pub fn new(secret_key: impl Into<String>, webhook_secret: impl Into<String>) -> Self {
        Self {
            client: stripe::Client::new(secret_key),
            webhook_secret: webhook_secret.into(),
        }
    }

    pub fn from_config(config: &StripeConfig) -> Self {
        Self::new(config.secret_key.clone(), config.webhook_secret.clone())
    }
}

/// Parse a raw identifier into one of the typed Stripe ids
fn parse_id<T: FromStr>(raw: &str, kind: &str) -> Result<T> {
    raw.parse::<T>()
        .map_err(|_| AppError::validation(format!("Invalid {} id: {}", kind, raw)))
}

/// Customer creation parameters: attaches the payment method and makes it
/// the default for invoices in one call
fn customer_params(request: &CreateCustomerRequest) -> Result<stripe::CreateCustomer<'_>> {
    let payment_method =
        parse_id::<stripe::PaymentMethodId>(&request.payment_method, "payment method")?;

    let mut params = stripe::CreateCustomer::new();
    params.email = Some(&request.email);
    params.invoice_settings = Some(stripe::CustomerInvoiceSettings {
        default_payment_method: Some(payment_method.to_string()),
        ..Default::default()
    });
    params.payment_method = Some(payment_method);

    Ok(params)
}

fn subscription_params<'a>(
    request: &NewSubscription,
    expand: &'a [&'a str],
) -> Result<stripe::CreateSubscription<'a>> {
    let customer = parse_id::<stripe::CustomerId>(&request.customer_id, "customer")?;

    let mut params = stripe::CreateSubscription::new(customer);
    params.items = Some(vec![stripe::CreateSubscriptionItems {
        plan: Some(request.plan_id.clone()),
        ..Default::default()
    }]);
    params.expand = expand;

    Ok(params)
}

fn to_subscription(subscription: stripe::Subscription) -> Result<Subscription> {
    let object = serde_json::to_value(&subscription)?;

    Ok(Subscription {
        id: subscription.id.to_string(),
        status: subscription.status.to_string(),
        object,
    })
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    async fn create_customer(&self, request: &CreateCustomerRequest) -> Result<Customer> {
        let params = customer_params(request)?;
        let customer = stripe::Customer::create(&self.client, params).await?;

        Ok(Customer {
            id: customer.id.to_string(),
        })
    }

    async fn create_subscription(&self, request: &NewSubscription) -> Result<Subscription> {
        let expand: Vec<&str> = request.expand.iter().map(String::as_str).collect();
        let params = subscription_params(request, &expand)?;

        let subscription = stripe::Subscription::create(&self.client, params).await?;
        to_subscription(subscription)
    }

    async fn retrieve_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        let id = parse_id::<stripe::SubscriptionId>(subscription_id, "subscription")?;
        let subscription = stripe::Subscription::retrieve(&self.client, &id, &[]).await?;
        to_subscription(subscription)
    }

    fn verify_webhook(&self, payload: &str, signature: &str) -> Result<WebhookEvent> {
        // BadParse is only raised once the signature and timestamp have passed
        match stripe::Webhook::construct_event(payload, signature, &self.webhook_secret) {
            Ok(_) | Err(stripe::WebhookError::BadParse(_)) => WebhookEvent::from_json(payload),
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &str {
        "stripe"
    }
}
