use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Event type the gateway acts on
pub const PAYMENT_INTENT_SUCCEEDED: &str = "payment_intent.succeeded";

/// A webhook event whose signature has been verified
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
}

impl WebhookEvent {
    /// Read `id` and `type` from an event body whose signature already checked out
    pub fn from_json(payload: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(payload)
            .map_err(|e| AppError::signature(format!("Failed to parse event: {}", e)))?;

        let event_type = value
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AppError::signature("Event has no type"))?
            .to_string();
        let id = value
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        Ok(WebhookEvent { id, event_type })
    }
}

/// Result of dispatching a verified event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    Handled { event_id: String, event_type: String },
    Unhandled { event_id: String, event_type: String },
}

impl WebhookOutcome {
    pub fn event_type(&self) -> &str {
        match self {
            WebhookOutcome::Handled { event_type, .. }
            | WebhookOutcome::Unhandled { event_type, .. } => event_type,
        }
    }
}
