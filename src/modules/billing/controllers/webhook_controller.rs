use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{info, warn};

use crate::modules::billing::BillingState;

/// Header carrying the `t=<timestamp>,v1=<hmac>` signature
pub const SIGNATURE_HEADER: &str = "Stripe-Signature";

/// Receive a payment provider webhook
///
/// POST /webhook
///
/// The raw body is verified against the `Stripe-Signature` header before it
/// is parsed, so it is taken as bytes rather than JSON.
///
/// # Returns
/// * `200 OK` - empty body, event handled (or acknowledged by policy)
/// * `400 Bad Request` - empty body, signature verification failed or the
///   event type is not handled
pub async fn process_webhook(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<BillingState>,
) -> HttpResponse {
    let signature = extract_signature(&req);

    let outcome = match state.webhooks.process_webhook(&body, signature) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %e, "Rejected webhook delivery");
            return HttpResponse::BadRequest().finish();
        }
    };

    if state.webhooks.acknowledges(&outcome) {
        info!(event_type = %outcome.event_type(), "Webhook acknowledged");
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::BadRequest().finish()
    }
}

/// Extract the webhook signature from request headers
fn extract_signature(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(SIGNATURE_HEADER)
        .and_then(|h| h.to_str().ok())
}
