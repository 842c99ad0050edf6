//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only serves files: the built client bundle from the site
//! directory plus a health probe. Rendering happens entirely in the browser.
//!
//! Unknown page paths get the `index.html` shell. Unknown asset paths (last
//! segment has an extension) get a 404, so a missing image or script never
//! comes back as HTML.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Static site router rooted at `site_dir`.
pub fn app(site_dir: &Path) -> Router {
    let shell = Router::new().fallback(page_shell).with_state(site_dir.join("index.html"));
    let site = ServeDir::new(site_dir).append_index_html_on_directories(true).fallback(shell);

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// True when the final path segment names a file, e.g. `/img/photo.png`.
fn is_asset_path(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

async fn page_shell(State(index): State<PathBuf>, uri: Uri) -> Response {
    if is_asset_path(uri.path()) {
        return StatusCode::NOT_FOUND.into_response();
    }
    match tokio::fs::read(&index).await {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, index = %index.display(), "page shell unavailable");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
