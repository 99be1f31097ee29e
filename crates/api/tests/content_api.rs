//! Integration tests for the `/api/v1` content routes against a mocked CMS.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{body_json, get, UNREACHABLE_CMS};
use folio_core::defaults::{DEFAULT_BIO_LEFT, DEFAULT_SITE_NAME};

async fn mock_projects(server: &MockServer, docs: Value) {
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .and(query_param("where[status][equals]", "published"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "docs": docs })))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_projects_returns_normalized_views_in_order() {
    let server = MockServer::start().await;
    mock_projects(
        &server,
        json!([
            {"id": 2, "title": "Second", "slug": "second", "order": "2", "status": "published",
             "categories": ["Web"], "outcomes": [{"text": "Shipped"}]},
            {"id": 1, "title": "First", "slug": "first", "order": 1, "status": "published",
             "carouselImages": [{"image": {"url": "/a.webp"}}, {"alt": "no url"}]}
        ]),
    )
    .await;

    let response = get(common::build_test_app(&server.uri()), "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["slug"], "first");
    assert_eq!(data[0]["id"], "1");
    assert_eq!(data[0]["carouselImages"], json!([{"url": "/a.webp", "alt": "First"}]));
    assert_eq!(data[1]["categories"], json!(["Web"]));
    assert_eq!(data[1]["outcomes"], json!(["Shipped"]));
    assert_eq!(data[1]["order"], json!(2));
}

#[tokio::test]
async fn project_hero_exposes_generated_variants() {
    let server = MockServer::start().await;
    mock_projects(
        &server,
        json!([{
            "slug": "striker",
            "status": "published",
            "heroImage": {
                "url": "/media/hero.png",
                "mimeType": "image/png",
                "sizes": {
                    "card": {"url": "/media/hero-800x800.webp"},
                    "large": {"url": "/media/hero-1920.webp"}
                }
            }
        }]),
    )
    .await;

    let response = get(common::build_test_app(&server.uri()), "/api/v1/projects").await;
    let json = body_json(response).await;
    assert_eq!(
        json["data"][0]["heroImage"]["variants"],
        json!({"card": "/media/hero-800x800.webp", "large": "/media/hero-1920.webp"})
    );
}

#[tokio::test]
async fn list_projects_is_empty_when_cms_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let response = get(common::build_test_app(&server.uri()), "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"data": []}));
}

#[tokio::test]
async fn get_project_by_slug() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .and(query_param("where[slug][equals]", "striker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{"id": "p1", "title": "Striker", "slug": "striker", "status": "published"}]
        })))
        .mount(&server)
        .await;

    let response = get(common::build_test_app(&server.uri()), "/api/v1/projects/striker").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Striker");
    assert_eq!(json["data"]["status"], "published");
}

#[tokio::test]
async fn unknown_project_returns_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"docs": []})))
        .mount(&server)
        .await;

    let response = get(common::build_test_app(&server.uri()), "/api/v1/projects/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_slug_is_rejected_without_cms_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let response = get(common::build_test_app(&server.uri()), "/api/v1/projects/Not_A_Slug").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Globals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn site_config_normalizes_social_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/globals/site-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Jane Doe",
            "socialLinks": [
                "https://linkedin.com/in/jane",
                {"platform": "Dribbble", "url": "https://dribbble.com/jane", "label": "ignored"},
                {"platform": "custom", "url": "https://jane.blog", "label": "Blog"},
                {"platform": "github", "url": "not a url"}
            ]
        })))
        .mount(&server)
        .await;

    let response = get(common::build_test_app(&server.uri()), "/api/v1/site-config").await;
    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["name"], "Jane Doe");
    assert_eq!(
        data["socialLinks"],
        json!([
            {"platform": "linkedin", "url": "https://linkedin.com/in/jane"},
            {"platform": "dribbble", "url": "https://dribbble.com/jane"},
            {"platform": "custom", "url": "https://jane.blog", "label": "Blog"}
        ])
    );
}

#[tokio::test]
async fn about_splits_legacy_bio() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/globals/about-section"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bio": "First paragraph.\n\nSecond paragraph.",
            "imageCarousel": [{"image": {"url": "/1.jpg"}}]
        })))
        .mount(&server)
        .await;

    let response = get(common::build_test_app(&server.uri()), "/api/v1/about").await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["bioLeft"], "First paragraph.");
    assert_eq!(json["data"]["bioRight"], "Second paragraph.");
    assert_eq!(json["data"]["carouselImages"][0]["alt"], "About");
}

// ---------------------------------------------------------------------------
// Home page and degraded mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_includes_featured_project() {
    let server = MockServer::start().await;
    mock_projects(
        &server,
        json!([
            {"slug": "a", "order": 1, "status": "published"},
            {"slug": "b", "order": 2, "status": "published", "featured": 1}
        ]),
    )
    .await;

    let response = get(common::build_test_app(&server.uri()), "/api/v1/home").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["data"]["projects"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["featured"]["slug"], "b");
    assert_eq!(json["data"]["site"]["name"], DEFAULT_SITE_NAME);
}

#[tokio::test]
async fn every_route_serves_fallbacks_when_cms_is_down() {
    for uri in ["/api/v1/home", "/api/v1/projects", "/api/v1/site-config", "/api/v1/about"] {
        let response = get(common::build_test_app(UNREACHABLE_CMS), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }

    let json = body_json(get(common::build_test_app(UNREACHABLE_CMS), "/api/v1/home").await).await;
    let data = &json["data"];
    assert_eq!(data["projects"], json!([]));
    assert_matches!(data.get("featured"), None);
    assert_eq!(data["site"]["name"], DEFAULT_SITE_NAME);
    assert_eq!(data["about"]["bioLeft"], DEFAULT_BIO_LEFT);
}
