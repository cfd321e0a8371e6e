//! Integration tests for the HTTP surface.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use visual_hash::web::{self, AppState};
use visual_hash::{HashConfig, Variant, VisualHasher};

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Small canvases keep the renders quick.
fn create_state(variant: Variant, chunk_size: usize) -> Arc<AppState> {
    let mut config = HashConfig::for_variant(variant);
    config.width = 240;
    config.height = 240;
    Arc::new(AppState::new(VisualHasher::new(config), chunk_size))
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The base64 payload of the first embedded data URL.
fn embedded_png(html: &str) -> &str {
    let start = html.find(DATA_URL_PREFIX).expect("no data URL in page") + DATA_URL_PREFIX.len();
    let len = html[start..].find('"').unwrap();
    &html[start..start + len]
}

// ========== Landing page ==========

#[tokio::test]
async fn test_index_has_form_and_no_image() {
    let app = web::router(create_state(Variant::Classic, 8192));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response.into_body()).await;
    assert!(html.contains("action=\"/generate-plot\""));
    assert!(!html.contains(DATA_URL_PREFIX));
}

#[tokio::test]
async fn test_random_name() {
    let app = web::router(create_state(Variant::Classic, 8192));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/random-name")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let name = body_string(response.into_body()).await;
    assert_eq!(name.split(' ').count(), 3);
}

// ========== Generate ==========

#[tokio::test]
async fn test_generate_plot_embeds_png() {
    let app = web::router(create_state(Variant::Classic, 8192));
    let response = app.oneshot(form_post("/generate-plot", "name=Bob")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response.into_body()).await;
    assert!(html.contains(DATA_URL_PREFIX));
    assert!(html.contains("data-name=\"Bob\""));
    // base64 of the PNG signature
    assert!(embedded_png(&html).starts_with("iVBORw0KGgo"));
}

#[tokio::test]
async fn test_generate_plot_is_repeatable() {
    let state = create_state(Variant::Polyline, 8192);

    let first = web::router(Arc::clone(&state))
        .oneshot(form_post("/generate-plot", "name=Bob"))
        .await
        .unwrap();
    let second = web::router(state)
        .oneshot(form_post("/generate-plot", "name=Bob"))
        .await
        .unwrap();

    let first = body_string(first.into_body()).await;
    let second = body_string(second.into_body()).await;
    assert_eq!(embedded_png(&first), embedded_png(&second));
}

#[tokio::test]
async fn test_generate_plot_colored_variant() {
    let app = web::router(create_state(Variant::CurvedColored, 8192));
    let response = app
        .oneshot(form_post("/generate-plot", "name=Mary+Jane"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response.into_body()).await;
    assert!(html.contains("data-name=\"Mary Jane\""));
}

#[tokio::test]
async fn test_generate_plot_blank_name() {
    let app = web::router(create_state(Variant::Classic, 8192));
    let response = app
        .oneshot(form_post("/generate-plot", "name=+++"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_string(response.into_body()).await;
    assert!(html.contains("name must not be empty"));
}

#[tokio::test]
async fn test_generate_plot_missing_field() {
    let app = web::router(create_state(Variant::Classic, 8192));
    let response = app
        .oneshot(form_post("/generate-plot", "other=1"))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_generate_plot_rejects_get() {
    let app = web::router(create_state(Variant::Classic, 8192));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/generate-plot")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ========== Download ==========

#[tokio::test]
async fn test_download_plot_attachment() {
    let state = create_state(Variant::Classic, 1024);
    let response = web::router(Arc::clone(&state))
        .oneshot(form_post("/download-plot", "name=Mary+Jane"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"mary-jane_visual_hash.png\""
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let expected = state.hasher.render("Mary Jane").unwrap();
    assert_eq!(bytes.to_vec(), expected.png_bytes);
}

#[tokio::test]
async fn test_download_matches_generated_image() {
    let state = create_state(Variant::Classic, 300);

    let page = web::router(Arc::clone(&state))
        .oneshot(form_post("/generate-plot", "name=Alice"))
        .await
        .unwrap();
    let html = body_string(page.into_body()).await;

    let download = web::router(state)
        .oneshot(form_post("/download-plot", "name=Alice"))
        .await
        .unwrap();
    let png = download.into_body().collect().await.unwrap().to_bytes();

    use base64::Engine;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
    assert_eq!(embedded_png(&html), encoded);
}

#[tokio::test]
async fn test_download_plot_blank_name() {
    let app = web::router(create_state(Variant::Classic, 8192));
    let response = app.oneshot(form_post("/download-plot", "name=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
