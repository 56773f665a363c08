//! Subscription Gateway Library
//!
//! HTTP gateway in front of the Stripe API: customer onboarding with a default
//! payment method, subscription creation and lookup, and signed webhook intake.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::billing;
pub use modules::health;
