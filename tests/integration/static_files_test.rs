//! Static client assets served next to the API

#[path = "../helpers/mod.rs"]
mod helpers;

use std::fs;
use std::path::PathBuf;

use helpers::*;
use serde_json::Value;
use subscription_gateway::billing::MockPaymentProvider;
use subscription_gateway::config::StaticFilesConfig;

const INDEX_HTML: &str = "<!doctype html><title>Subscribe</title>";

/// Fresh directory holding an index page and one script
struct ClientDir {
    path: PathBuf,
}

impl ClientDir {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("gateway-client-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("index.html"), INDEX_HTML).unwrap();
        fs::write(path.join("script.js"), "console.log('ready');").unwrap();
        Self { path }
    }

    fn config(&self) -> StaticFilesConfig {
        StaticFilesConfig {
            dir: self.path.clone(),
        }
    }
}

impl Drop for ClientDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[actix_web::test]
async fn test_index_served_at_root() {
    let client = ClientDir::new();
    let srv = spawn_test_server_with_static(
        billing_state(MockPaymentProvider::new()),
        client.config(),
    )
    .await;

    let mut response = srv.get("/").send().await.unwrap();

    assert_ok(&response);
    let body = response.body().await.unwrap();
    assert_eq!(body.as_ref(), INDEX_HTML.as_bytes());
}

#[actix_web::test]
async fn test_assets_served_by_path() {
    let client = ClientDir::new();
    let srv = spawn_test_server_with_static(
        billing_state(MockPaymentProvider::new()),
        client.config(),
    )
    .await;

    let response = srv.get("/script.js").send().await.unwrap();
    assert_ok(&response);

    let response = srv.get("/missing.css").send().await.unwrap();
    assert_not_found(&response);
}

#[actix_web::test]
async fn test_api_routes_take_precedence() {
    let client = ClientDir::new();
    let srv = spawn_test_server_with_static(
        billing_state(MockPaymentProvider::new()),
        client.config(),
    )
    .await;

    let mut response = srv.get("/public-key").send().await.unwrap();

    assert_ok(&response);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["publicKey"], TEST_PUBLIC_KEY);
}

#[actix_web::test]
async fn test_missing_directory_serves_api_only() {
    let config = StaticFilesConfig {
        dir: std::env::temp_dir().join(format!("gateway-absent-{}", uuid::Uuid::new_v4())),
    };
    let srv =
        spawn_test_server_with_static(billing_state(MockPaymentProvider::new()), config).await;

    let response = srv.get("/").send().await.unwrap();
    assert_not_found(&response);

    let response = srv.get("/public-key").send().await.unwrap();
    assert_ok(&response);
}
