use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed or incomplete request input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Webhook payload did not match its signature header
    #[error("Signature verification failed: {0}")]
    Signature(String),

    /// Payment provider errors (network, rate limit, invalid resource)
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        // Signature failures never echo details back to the sender
        if let AppError::Signature(_) = self {
            return HttpResponse::build(status_code).finish();
        }

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Signature(_) => StatusCode::BAD_REQUEST,
            AppError::Gateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<stripe::StripeError> for AppError {
    fn from(err: stripe::StripeError) -> Self {
        AppError::Gateway(format!("Stripe API error: {}", err))
    }
}

impl From<stripe::WebhookError> for AppError {
    fn from(err: stripe::WebhookError) -> Self {
        AppError::Signature(err.to_string())
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn signature(msg: impl Into<String>) -> Self {
        AppError::Signature(msg.into())
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        AppError::Gateway(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
