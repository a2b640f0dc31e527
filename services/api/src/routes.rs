use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use home_valuation::error::AppError;
use home_valuation::intake::{
    FieldView, FormSession, PricingMode, ValuationPayload, ACCEPT_HINT,
};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FormLayoutResponse<'a> {
    pub(crate) pricing_mode: PricingMode,
    pub(crate) modes: Vec<ModeOption>,
    pub(crate) fields: Vec<FieldView<'a>>,
    pub(crate) dropzone: DropzoneView,
}

#[derive(Debug, Serialize)]
pub(crate) struct ModeOption {
    pub(crate) key: PricingMode,
    pub(crate) label: &'static str,
    pub(crate) selected: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct DropzoneView {
    pub(crate) label: String,
    pub(crate) hint: String,
    pub(crate) accept: &'static str,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/valuation/form/:mode", get(form_layout_endpoint))
        .route("/api/v1/valuation/requests", post(submit_request_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Fields a fresh form shows for `mode`, with their initial values.
pub(crate) async fn form_layout_endpoint(
    Extension(state): Extension<AppState>,
    Path(mode): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mode = mode.parse::<PricingMode>()?;
    let mut session = FormSession::new();
    session.set_mode(mode);

    let layout = FormLayoutResponse {
        pricing_mode: mode,
        modes: PricingMode::ordered()
            .into_iter()
            .map(|option| ModeOption {
                key: option,
                label: option.label(),
                selected: option == mode,
            })
            .collect(),
        fields: session.visible_fields(),
        dropzone: DropzoneView {
            label: session.file_label(),
            hint: state.intake.upload_hint(),
            accept: ACCEPT_HINT,
        },
    };

    Ok(Json(serde_json::to_value(layout)?))
}

/// Accepts a payload in the wire schema and hands it to the notifier.
pub(crate) async fn submit_request_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ValuationPayload>,
) -> impl IntoResponse {
    state.submissions.submit(&payload);

    (
        StatusCode::ACCEPTED,
        Json(json!({
            "status": "received",
            "pricingMode": payload.pricing_mode(),
        })),
    )
}
