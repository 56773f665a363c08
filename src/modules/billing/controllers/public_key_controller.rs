use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::modules::billing::BillingState;

/// Publishable key handed to the client-side payment library
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicKeyResponse {
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

/// GET /public-key
/// Any request body is ignored
pub async fn get_public_key(state: web::Data<BillingState>) -> HttpResponse {
    HttpResponse::Ok().json(PublicKeyResponse {
        public_key: state.publishable_key.clone(),
    })
}
