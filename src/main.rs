use std::sync::Arc;

use actix_web::{App, HttpServer};
use anyhow::Context;
use subscription_gateway::billing::{BillingState, StripeProvider};
use subscription_gateway::config::{AppConfig, Config, LogFormat};
use subscription_gateway::middleware::{ErrorHandler, RequestId};
use subscription_gateway::modules;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config.app);

    tracing::info!("Starting Subscription Gateway");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());
    tracing::info!(
        plan_id = %config.stripe.plan_id,
        unhandled_events = ?config.stripe.unhandled_events,
        "Billing configured"
    );

    let provider = Arc::new(StripeProvider::from_config(&config.stripe));
    let state = BillingState::new(provider, &config.stripe);
    let static_files = config.static_files.clone();

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let state = state.clone();
        let static_files = static_files.clone();

        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .configure(|cfg| modules::configure(cfg, state))
            .configure(|cfg| modules::configure_static_files(cfg, &static_files))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(app: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("subscription_gateway={},actix_web=info", app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
