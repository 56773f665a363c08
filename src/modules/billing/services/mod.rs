pub mod mock;
pub mod provider_trait;
pub mod stripe_provider;
pub mod subscription_service;
pub mod webhook_handler;

pub use mock::{MockPaymentProvider, ProviderCall, MOCK_SIGNATURE};
pub use provider_trait::PaymentProvider;
pub use stripe_provider::StripeProvider;
pub use subscription_service::{SubscriptionService, LATEST_PAYMENT_INTENT};
pub use webhook_handler::WebhookHandler;
