//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health probe and Leptos SSR for the landing page under a single
//! Axum router. Static assets (the `/pkg` hydration bundle and stylesheet) are
//! served from `site_root` by the Leptos file-and-error fallback. The page
//! itself never calls back into this server.


use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Operational endpoints that need no application state.
fn probe_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/healthz", get(healthz))
}

/// Full site: probes + Leptos SSR + static assets, with request tracing.
pub fn app(leptos_options: LeptosOptions, config: &ServerConfig) -> Router {
    let routes = generate_route_list(client::app::App);

    let router = probe_routes()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options)
        .layer(TraceLayer::new_for_http());

    if config.compression {
        router.layer(CompressionLayer::new())
    } else {
        router
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
