use std::sync::Arc;

use tracing::{error, info};

use super::provider_trait::PaymentProvider;
use crate::core::Result;
use crate::modules::billing::models::{
    CreateCustomerRequest, NewSubscription, RetrieveSubscriptionRequest, Subscription,
};

/// Expansion applied to every new subscription
pub const LATEST_PAYMENT_INTENT: &str = "latest_invoice.payment_intent";

/// Customer onboarding and subscription lookups against the payment provider
pub struct SubscriptionService {
    provider: Arc<dyn PaymentProvider>,
    plan_id: String,
}

impl SubscriptionService {
    pub fn new(provider: Arc<dyn PaymentProvider>, plan_id: impl Into<String>) -> Self {
        Self {
            provider,
            plan_id: plan_id.into(),
        }
    }

    /// Create a customer with a default payment method, then subscribe it to
    /// the configured plan
    ///
    /// The two provider calls are not transactional. When the subscription
    /// call fails the customer already exists; it is logged and left in place.
    pub async fn create_customer_with_subscription(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<Subscription> {
        request.validate()?;

        info!(
            provider = %self.provider.name(),
            plan_id = %self.plan_id,
            "Creating customer"
        );

        let customer = match self.provider.create_customer(&request).await {
            Ok(customer) => customer,
            Err(e) => {
                error!(
                    provider = %self.provider.name(),
                    error = %e,
                    "Failed to create customer"
                );
                return Err(e);
            }
        };

        info!(customer_id = %customer.id, "Customer created");

        let params = NewSubscription {
            customer_id: customer.id.clone(),
            plan_id: self.plan_id.clone(),
            expand: vec![LATEST_PAYMENT_INTENT.to_string()],
        };

        match self.provider.create_subscription(&params).await {
            Ok(subscription) => {
                info!(
                    customer_id = %customer.id,
                    subscription_id = %subscription.id,
                    status = %subscription.status,
                    "Subscription created"
                );
                Ok(subscription)
            }
            Err(e) => {
                error!(
                    customer_id = %customer.id,
                    plan_id = %self.plan_id,
                    error = %e,
                    "Subscription creation failed, customer left without subscription"
                );
                Err(e)
            }
        }
    }

    pub async fn retrieve_subscription(
        &self,
        request: RetrieveSubscriptionRequest,
    ) -> Result<Subscription> {
        request.validate()?;

        let subscription = self
            .provider
            .retrieve_subscription(&request.subscription_id)
            .await?;

        info!(
            subscription_id = %subscription.id,
            status = %subscription.status,
            "Subscription retrieved"
        );

        Ok(subscription)
    }
}
