pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use folio_core::config::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(config: Config) -> Router {
    let app_state = state::AppState::new(config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Site settings
        .route("/api/config", get(routes::config::get_config))
        .route("/api/options", get(routes::options::get_options))
        // Hire Me wizard
        .route("/api/hire/preview", post(routes::hire::preview))
        .route(
            "/api/hire/channels/{channel}",
            post(routes::hire::render_channel),
        )
        // Contact composer
        .route("/api/contact/preview", post(routes::contact::preview))
        .route(
            "/api/contact/channels/{channel}",
            post(routes::contact::render_channel),
        )
        .fallback(embed::static_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the site server on `port`.
///
/// In debug builds the pages are read from `site/` on disk; release builds
/// embed them in the binary via rust-embed.
pub async fn serve(config: Config, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("127.0.0.1:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(config, listener, open_browser).await
}

/// Start the site server on a pre-bound listener.
///
/// Lets the caller bind port 0 and read the actual port before starting.
pub async fn serve_on(
    config: Config,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(config);

    let url = format!("http://localhost:{actual_port}");
    tracing::info!("folio site listening on {url}");

    if open_browser {
        if let Err(e) = open::that(&url) {
            tracing::warn!("could not open browser: {e}");
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
