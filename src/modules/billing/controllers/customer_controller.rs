use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::modules::billing::models::CreateCustomerRequest;
use crate::modules::billing::BillingState;

/// Create a customer and subscribe it to the configured plan
/// POST /create-customer
/// Returns the provider's subscription object, with the latest invoice's
/// payment intent expanded
pub async fn create_customer(
    state: web::Data<BillingState>,
    body: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let subscription = state
        .subscriptions
        .create_customer_with_subscription(body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(subscription.object))
}
