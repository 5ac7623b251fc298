use axum::extract::{Path, State};
use axum::Json;
use folio_core::composer::{Composer, ComposerCommand, ComposerSnapshot};
use folio_core::dispatch::{Delivery, DeliveryChannel};
use folio_core::form::{ContactField, FormRecord};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub record: FormRecord<ContactField>,
    #[serde(default)]
    pub commands: Vec<ComposerCommand>,
    /// Echoed back; see `HireRequest::seq`.
    #[serde(default)]
    pub seq: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ContactPreview {
    #[serde(flatten)]
    pub snapshot: ComposerSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,
}

fn replay(app: &AppState, request: ContactRequest) -> Composer {
    let mut composer = Composer::with_record(&app.config, request.record);
    for command in request.commands {
        composer.dispatch(command);
    }
    composer
}

/// POST /api/contact/preview
pub async fn preview(
    State(app): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Json<ContactPreview> {
    let seq = request.seq;
    Json(ContactPreview {
        snapshot: replay(&app, request).snapshot(),
        seq,
    })
}

/// POST /api/contact/channels/{channel}
pub async fn render_channel(
    State(app): State<AppState>,
    Path(channel): Path<String>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<Delivery>, AppError> {
    let channel: DeliveryChannel = channel.parse()?;
    let composer = replay(&app, request);
    Ok(Json(Delivery {
        channel,
        label: channel.label(),
        target: composer.render(channel),
    }))
}
