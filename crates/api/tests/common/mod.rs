#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_gateway::{ContentGateway, GatewayConfig};

/// A base URL nothing listens on.
pub const UNREACHABLE_CMS: &str = "http://127.0.0.1:1";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        site_url: "https://jane.design".to_string(),
    }
}

/// Build the full application router against the CMS REST API at
/// `cms_base_url`, with the same middleware stack production uses.
pub fn build_test_app(cms_base_url: &str) -> Router {
    let gateway_config = GatewayConfig {
        rest_base_url: cms_base_url.to_string(),
        request_timeout_secs: 5,
        ..GatewayConfig::default()
    };
    let gateway = ContentGateway::new(&gateway_config, None).unwrap();
    let config = test_config();

    let state = AppState {
        gateway: Arc::new(gateway),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
