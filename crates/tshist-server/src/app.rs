// File: crates/tshist-server/src/app.rs
// Summary: Router, handlers and the error -> HTTP status mapping.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, error, info_span};
use tshist_core::{ChartError, Pipeline, ResponseEnvelope};

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Clone)]
struct AppState {
    pipeline: Arc<Pipeline>,
}

pub fn router(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ts-hist/:filename", get(ts_hist))
        .with_state(AppState { pipeline })
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Render a fresh chart. The file name only has to look like `<name>.png`.
async fn ts_hist(State(state): State<AppState>, Path(filename): Path<String>) -> Result<Response, AppError> {
    if !is_png_name(&filename) {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let span = info_span!("ts_hist", %filename);
    let pipeline = state.pipeline.clone();
    let envelope = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        let mut rng = StdRng::from_entropy();
        pipeline.respond(&mut rng)
    })
    .await??;

    debug!(bytes = envelope.body().len(), "sending png");
    Ok(png_response(envelope))
}

fn is_png_name(name: &str) -> bool {
    name.len() > ".png".len() && name.ends_with(".png")
}

fn png_response(envelope: ResponseEnvelope) -> Response {
    let (parts, body) = envelope.into_http().into_parts();
    Response::from_parts(parts, Body::from(body))
}

/// Anything that stops an image from being produced. Always a 5xx with a
/// short text body and never partial image bytes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("render worker failed: {0}")]
    Worker(String),
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Worker(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "image request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
