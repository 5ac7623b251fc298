use axum::Json;
use folio_core::catalog::{Choice, INTENT_OPTIONS, LOCATION_OPTIONS};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Options {
    pub intents: &'static [Choice],
    pub locations: &'static [Choice],
}

/// GET /api/options: the choice cards for steps 1 and 2.
pub async fn get_options() -> Json<Options> {
    Json(Options {
        intents: INTENT_OPTIONS,
        locations: LOCATION_OPTIONS,
    })
}
