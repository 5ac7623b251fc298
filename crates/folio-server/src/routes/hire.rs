use axum::extract::{Path, State};
use axum::Json;
use folio_core::dispatch::{Delivery, DeliveryChannel};
use folio_core::form::{FormRecord, HireField};
use folio_core::wizard::{Outcome, Wizard, WizardCommand, WizardSnapshot, WizardStep};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct HireRequest {
    #[serde(default)]
    pub record: FormRecord<HireField>,
    /// Step the page believes it is on; clamped to what the record allows.
    #[serde(default)]
    pub step: Option<WizardStep>,
    #[serde(default)]
    pub commands: Vec<WizardCommand>,
    /// Request counter chosen by the page, echoed back so it can drop
    /// responses that arrive out of order.
    #[serde(default)]
    pub seq: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct HirePreview {
    #[serde(flatten)]
    pub snapshot: WizardSnapshot,
    /// One entry per submitted command, in order.
    pub outcomes: Vec<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,
}

fn replay(app: &AppState, request: HireRequest) -> (Wizard, Vec<Outcome>) {
    let step = request.step.unwrap_or(WizardStep::Intent);
    let mut wizard = Wizard::restore(&app.config, request.record, step);
    let outcomes = request
        .commands
        .into_iter()
        .map(|command| wizard.dispatch(command))
        .collect();
    (wizard, outcomes)
}

/// POST /api/hire/preview: replay commands against the submitted wizard
/// state and return the resulting snapshot.
pub async fn preview(
    State(app): State<AppState>,
    Json(request): Json<HireRequest>,
) -> Json<HirePreview> {
    let seq = request.seq;
    let (wizard, outcomes) = replay(&app, request);
    Json(HirePreview {
        snapshot: wizard.snapshot(),
        outcomes,
        seq,
    })
}

/// POST /api/hire/channels/{channel}: the target for one delivery channel.
pub async fn render_channel(
    State(app): State<AppState>,
    Path(channel): Path<String>,
    Json(request): Json<HireRequest>,
) -> Result<Json<Delivery>, AppError> {
    let channel: DeliveryChannel = channel.parse()?;
    let (wizard, _) = replay(&app, request);
    Ok(Json(Delivery {
        channel,
        label: channel.label(),
        target: wizard.render(channel),
    }))
}
