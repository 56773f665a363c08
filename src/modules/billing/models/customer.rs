use crate::core::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Body of `POST /create-customer`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    /// Tokenized payment method produced by the client-side library
    pub payment_method: String,

    /// Billing email of the new customer
    pub email: String,
}

impl CreateCustomerRequest {
    pub fn validate(&self) -> Result<()> {
        if self.payment_method.trim().is_empty() {
            return Err(AppError::validation("payment_method must not be empty"));
        }

        if self.email.trim().is_empty() {
            return Err(AppError::validation("email must not be empty"));
        }

        Ok(())
    }
}

/// Customer created at the payment provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
}
