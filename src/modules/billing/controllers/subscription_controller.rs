use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::modules::billing::models::RetrieveSubscriptionRequest;
use crate::modules::billing::BillingState;

/// Look up a subscription by id
/// POST /subscription
pub async fn retrieve_subscription(
    state: web::Data<BillingState>,
    body: web::Json<RetrieveSubscriptionRequest>,
) -> Result<HttpResponse, AppError> {
    let subscription = state
        .subscriptions
        .retrieve_subscription(body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(subscription.object))
}
