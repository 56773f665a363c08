use crate::core::{AppError, Result};

/// Plan every new subscription is created on unless `STRIPE_PLAN_ID` overrides it
pub const DEFAULT_PLAN_ID: &str = "plan_FSDjyHWis0QVwl";

/// What the webhook endpoint answers for a correctly signed event it does not handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnhandledEventPolicy {
    /// Respond 400, the same as a signature failure
    #[default]
    Reject,
    /// Respond 200 and do nothing
    Acknowledge,
}

impl UnhandledEventPolicy {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "reject" => Ok(UnhandledEventPolicy::Reject),
            "acknowledge" | "ack" => Ok(UnhandledEventPolicy::Acknowledge),
            other => Err(AppError::configuration(format!(
                "Invalid WEBHOOK_UNHANDLED_EVENTS '{}' (expected 'reject' or 'acknowledge')",
                other
            ))),
        }
    }
}

/// Stripe credentials and billing settings
#[derive(Clone)]
pub struct StripeConfig {
    pub secret_key: String,
    pub publishable_key: String,
    pub webhook_secret: String,
    pub plan_id: String,
    pub unhandled_events: UnhandledEventPolicy,
}

// Secrets stay out of logs and panic messages
impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"<redacted>")
            .field("publishable_key", &self.publishable_key)
            .field("webhook_secret", &"<redacted>")
            .field("plan_id", &self.plan_id)
            .field("unhandled_events", &self.unhandled_events)
            .finish()
    }
}

impl StripeConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| AppError::configuration(format!("{} not set", key)))
        };

        Ok(StripeConfig {
            secret_key: required("STRIPE_SECRET_KEY")?,
            publishable_key: required("STRIPE_PUBLIC_KEY")?,
            webhook_secret: required("STRIPE_WEBHOOK_SECRET")?,
            plan_id: lookup("STRIPE_PLAN_ID").unwrap_or_else(|| DEFAULT_PLAN_ID.to_string()),
            unhandled_events: match lookup("WEBHOOK_UNHANDLED_EVENTS") {
                Some(value) => UnhandledEventPolicy::parse(&value)?,
                None => UnhandledEventPolicy::default(),
            },
        })
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("STRIPE_SECRET_KEY", &self.secret_key),
            ("STRIPE_PUBLIC_KEY", &self.publishable_key),
            ("STRIPE_WEBHOOK_SECRET", &self.webhook_secret),
            ("STRIPE_PLAN_ID", &self.plan_id),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::configuration(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }
}
