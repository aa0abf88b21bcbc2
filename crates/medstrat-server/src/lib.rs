pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use medstrat_core::config::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(app_state: state::AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(routes::health::health))
        .route("/api/catalog", get(routes::catalog::get_catalog))
        .route(
            "/api/brand-strategies",
            get(routes::brand::rank_strategies),
        )
        // Sessions
        .route("/api/sessions", post(routes::sessions::create_session))
        .route(
            "/api/sessions/{id}",
            get(routes::sessions::get_session).delete(routes::sessions::delete_session),
        )
        .route(
            "/api/sessions/{id}/actions",
            post(routes::sessions::apply_action),
        )
        .route(
            "/api/sessions/{id}/strategy",
            get(routes::sessions::get_strategy),
        )
        .fallback(embed::static_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Router over a fresh in-memory session store sized by `config`.
pub fn build_router_with_config(config: Config) -> Router {
    build_router(state::AppState::new(config))
}

/// Start the web UI server on the address named in `config`.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
    serve_on(config, listener).await
}

/// Start the web UI server on a pre-bound listener.
///
/// The caller can read the actual port before starting (useful when
/// `port = 0` and the OS picks a free port).
pub async fn serve_on(config: Config, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    let open_browser = config.server.open_browser;
    let app = build_router_with_config(config);

    let url = format!("http://{addr}");
    tracing::info!("medstrat listening on {url}");

    if open_browser {
        if let Err(e) = open::that(&url) {
            tracing::warn!(error = %e, "could not open browser");
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
