//! Request handlers.

use std::convert::Infallible;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;
use maud::Markup;
use serde::Deserialize;

use crate::pipeline::download_filename;
use crate::plot::RenderedHash;
use crate::web::error::WebError;
use crate::web::names;
use crate::web::templates::{index_page, GeneratedView};
use crate::web::AppState;

/// Form body of the generate and download endpoints.
#[derive(Debug, Deserialize)]
pub struct NameForm {
    pub name: String,
}

/// Landing page without an image.
pub async fn index() -> Markup {
    index_page(None)
}

/// A random display name as plain text.
pub async fn random_name() -> String {
    names::random_name()
}

/// Render the hash for the posted name and embed it as a data URL.
pub async fn generate_plot(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NameForm>,
) -> Result<Markup, WebError> {
    let name = require_name(form.name)?;
    let rendered = render_blocking(&state, name.clone()).await?;
    tracing::info!(name = %name, bytes = rendered.png_bytes.len(), "generated visual hash");

    let data_url = rendered.data_url();
    let view = GeneratedView {
        name: &name,
        data_url: &data_url,
        width: rendered.width,
        height: rendered.height,
    };
    Ok(index_page(Some(&view)))
}

/// Render the hash for the posted name and stream it back as a PNG attachment.
pub async fn download_plot(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NameForm>,
) -> Result<Response, WebError> {
    let name = require_name(form.name)?;
    let rendered = render_blocking(&state, name.clone()).await?;
    let filename = download_filename(&name);
    tracing::info!(name = %name, filename = %filename, "downloading visual hash");

    let png = Bytes::from(rendered.png_bytes);
    let chunks = chunked(&png, state.download_chunk_size);
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "image/png")
        .header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from_stream(tokio_stream::iter(chunks)))
        .map_err(|e| WebError::Internal(format!("response build: {}", e)))
}

/// Reject blank names before any work is done.
fn require_name(name: String) -> Result<String, WebError> {
    if name.trim().is_empty() {
        return Err(WebError::BadRequest("name must not be empty".to_string()));
    }
    Ok(name)
}

/// Run the CPU-bound pipeline off the async workers.
async fn render_blocking(state: &Arc<AppState>, name: String) -> Result<RenderedHash, WebError> {
    let state = Arc::clone(state);
    let rendered = tokio::task::spawn_blocking(move || state.hasher.render(&name))
        .await
        .map_err(|e| WebError::Internal(format!("render task: {}", e)))??;
    Ok(rendered)
}

/// Split `bytes` into zero-copy slices of at most `size` bytes.
fn chunked(bytes: &Bytes, size: usize) -> Vec<Result<Bytes, Infallible>> {
    let size = size.max(1);
    (0..bytes.len())
        .step_by(size)
        .map(|start| Ok(bytes.slice(start..(start + size).min(bytes.len()))))
        .collect()
}
