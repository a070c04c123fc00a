use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::Error;

#[derive(Clone)]
struct AppState {
    index_path: Arc<PathBuf>,
}

pub async fn health_check() -> &'static str {
    "OK"
}

async fn serve_index(State(state): State<AppState>) -> Result<Response, Error> {
    match tokio::fs::read(state.index_path.as_path()).await {
        Ok(bytes) => Ok((
            [
                (header::CONTENT_TYPE, "text/html; charset=utf-8"),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            bytes,
        )
            .into_response()),
        Err(err) => {
            error!("Error reading index.html: {} (attempted path: {:?})", err, state.index_path);
            Err(Error::MissingBundle(state.index_path.to_path_buf()))
        }
    }
}

/// Serves the built frontend out of `dist_dir`, revalidated on every load so
/// a rebuilt bundle is picked up immediately.
pub fn router(dist_dir: &Path) -> Router {
    let state = AppState {
        index_path: Arc::new(dist_dir.join("index.html")),
    };

    let cache_control_layer = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    );
    let static_service = cache_control_layer.layer(ServeDir::new(dist_dir));

    Router::new()
        .route("/", get(serve_index))
        .route("/api/health_check", get(health_check))
        .fallback_service(static_service)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
