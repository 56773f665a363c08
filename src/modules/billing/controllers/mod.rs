pub mod customer_controller;
pub mod public_key_controller;
pub mod subscription_controller;
pub mod webhook_controller;

use actix_web::web;

use super::BillingState;

/// Configure billing routes
pub fn configure(cfg: &mut web::ServiceConfig, state: BillingState) {
    cfg.app_data(web::Data::new(state))
        .route(
            "/public-key",
            web::get().to(public_key_controller::get_public_key),
        )
        .route(
            "/create-customer",
            web::post().to(customer_controller::create_customer),
        )
        .route(
            "/subscription",
            web::post().to(subscription_controller::retrieve_subscription),
        )
        .route(
            "/webhook",
            web::post().to(webhook_controller::process_webhook),
        );
}
