use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// The parts of the site config the pages need.
#[derive(Debug, Serialize)]
pub struct PublicConfig {
    pub owner: String,
    pub recipient: String,
    pub feedback_ms: u64,
    pub web_compose_base: String,
}

/// GET /api/config: read-only. The server never writes its config.
pub async fn get_config(State(app): State<AppState>) -> Json<PublicConfig> {
    let config = &app.config;
    Json(PublicConfig {
        owner: config.site.owner.clone(),
        recipient: config.site.recipient.clone(),
        feedback_ms: config.feedback.copied_window_ms,
        web_compose_base: config.delivery.web_compose_base.clone(),
    })
}
