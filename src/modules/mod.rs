pub mod billing;
pub mod health;

use actix_web::web;
use tracing::{info, warn};

use crate::config::StaticFilesConfig;
use crate::middleware::json_error_handler;

/// Register the JSON body configuration and every API route
pub fn configure(cfg: &mut web::ServiceConfig, state: billing::BillingState) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(health::configure)
        .configure(|cfg| billing::configure(cfg, state));
}

/// Serve client assets at `/`
///
/// Register after [`configure`]: the mount at `/` matches every path.
pub fn configure_static_files(cfg: &mut web::ServiceConfig, config: &StaticFilesConfig) {
    if !config.exists() {
        warn!(
            dir = %config.dir.display(),
            "Static directory not found, serving API routes only"
        );
        return;
    }

    info!(dir = %config.dir.display(), "Serving static files");
    cfg.service(actix_files::Files::new("/", config.dir.clone()).index_file("index.html"));
}
