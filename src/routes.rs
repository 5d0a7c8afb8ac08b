//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router carries the Leptos SSR routes generated from
//! [`portal_client::app::App`], the compiled bundle under `/pkg`, and a
//! liveness probe. There is no API here: the browser calls the REST
//! backend directly.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portal_client::app::App);
    let pkg_dir = pkg_dir(Path::new(leptos_options.site_root.as_ref()), leptos_options.site_pkg_dir.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portal_client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Directory holding the WASM bundle, JS glue, and stylesheet.
fn pkg_dir(site_root: &Path, site_pkg_dir: &str) -> PathBuf {
    site_root.join(site_pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
