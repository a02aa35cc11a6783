//! Local preview server.
//!
//! Renders pages on demand through the same [`Router`](crate::routes::Router)
//! and page functions the static build uses, so what you preview is what
//! `folio build` writes. Requests are answered in this order:
//!
//! 1. a file under `content/assets/` with the request path,
//! 2. a built-in icon under `/icons/`,
//! 3. the rendered page, with status 404 for unmatched routes.
//!
//! Content is loaded once at startup; restart the server to pick up edits.

use crate::generate;
use crate::pages;
use crate::site::{Site, SiteError};
use axum::{
    Router,
    extract::{Path as UrlPath, State},
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use log::{debug, error, info};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tower_http::services::ServeDir;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Site(#[from] SiteError),
}

/// Build the request router for a loaded site.
pub fn app(site: Site, assets_dir: &Path) -> Router {
    let pages = Router::new()
        .route("/icons/{file}", get(builtin_icon))
        .fallback(render_page)
        .with_state(Arc::new(site));
    Router::new().fallback_service(ServeDir::new(assets_dir).fallback(pages))
}

/// Load the site from `source` and serve it on `127.0.0.1:port` until the
/// process is stopped.
pub async fn serve(source: &Path, port: u16) -> Result<(), ServeError> {
    let site = Site::load(source)?;
    let app = app(site, &source.join("assets"));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("preview ready at http://localhost:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn render_page(State(site): State<Arc<Site>>, uri: Uri) -> Response {
    let route = site.router.resolve(uri.path());
    let status = if route.page().is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    debug!("{} {}", status.as_u16(), uri.path());
    match pages::render_route(&site, &route) {
        Ok(markup) => (status, Html(markup.into_string())).into_response(),
        Err(e) => {
            error!("failed to render {}: {e}", uri.path());
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn builtin_icon(State(site): State<Arc<Site>>, UrlPath(file): UrlPath<String>) -> Response {
    match generate::builtin_asset(&format!("icons/{file}")) {
        Some(svg) => ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response(),
        None => render_page(State(site), Uri::from_static("/404")).await,
    }
}

// ============================================================================
// Tests
// ============================================================================
