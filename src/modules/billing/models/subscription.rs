use crate::core::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /subscription`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrieveSubscriptionRequest {
    #[serde(rename = "subscriptionId")]
    pub subscription_id: String,
}

impl RetrieveSubscriptionRequest {
    pub fn validate(&self) -> Result<()> {
        if self.subscription_id.trim().is_empty() {
            return Err(AppError::validation("subscriptionId must not be empty"));
        }
        Ok(())
    }
}

/// Parameters for creating a subscription on a single plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscription {
    pub customer_id: String,
    pub plan_id: String,
    /// Dotted paths the provider should inline in its response
    pub expand: Vec<String>,
}

/// Subscription as returned by the payment provider
///
/// `object` is the provider's own JSON rendering and is what the HTTP layer
/// sends back to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: String,
    pub status: String,
    pub object: Value,
}
