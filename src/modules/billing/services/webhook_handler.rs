use crate::config::UnhandledEventPolicy;
use crate::core::{AppError, Result};
use crate::modules::billing::models::webhook::PAYMENT_INTENT_SUCCEEDED;
use crate::modules::billing::models::WebhookOutcome;
use std::sync::Arc;
use tracing::{info, warn};

use super::provider_trait::PaymentProvider;

/// Verifies inbound webhook deliveries and dispatches them by event type
///
/// Each delivery is handled on its own: no retry, no deduplication of event ids.
#[derive(Clone)]
pub struct WebhookHandler {
    provider: Arc<dyn PaymentProvider>,
    policy: UnhandledEventPolicy,
}

impl WebhookHandler {
    pub fn new(provider: Arc<dyn PaymentProvider>, policy: UnhandledEventPolicy) -> Self {
        Self { provider, policy }
    }

    /// Verify `payload` against the signature header and dispatch the event
    ///
    /// A missing header or a body that is not UTF-8 fails verification the
    /// same way a wrong signature does.
    pub fn process_webhook(
        &self,
        payload: &[u8],
        signature: Option<&str>,
    ) -> Result<WebhookOutcome> {
        let signature =
            signature.ok_or_else(|| AppError::signature("Missing Stripe-Signature header"))?;
        let payload = std::str::from_utf8(payload)
            .map_err(|e| AppError::signature(format!("Payload is not valid UTF-8: {}", e)))?;

        let event = self.provider.verify_webhook(payload, signature)?;

        if event.event_type == PAYMENT_INTENT_SUCCEEDED {
            info!(
                event_id = %event.id,
                event_type = %event.event_type,
                "Received event"
            );
            return Ok(WebhookOutcome::Handled {
                event_id: event.id,
                event_type: event.event_type,
            });
        }

        warn!(
            event_id = %event.id,
            event_type = %event.event_type,
            policy = ?self.policy,
            "Unexpected event type"
        );
        Ok(WebhookOutcome::Unhandled {
            event_id: event.id,
            event_type: event.event_type,
        })
    }

    /// Whether the outcome should be answered with a success status
    pub fn acknowledges(&self, outcome: &WebhookOutcome) -> bool {
        match outcome {
            WebhookOutcome::Handled { .. } => true,
            WebhookOutcome::Unhandled { .. } => self.policy == UnhandledEventPolicy::Acknowledge,
        }
    }
}
