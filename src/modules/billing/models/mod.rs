pub mod customer;
pub mod subscription;
pub mod webhook;

pub use customer::{CreateCustomerRequest, Customer};
pub use subscription::{NewSubscription, RetrieveSubscriptionRequest, Subscription};
pub use webhook::{WebhookEvent, WebhookOutcome};
