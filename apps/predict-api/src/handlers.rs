//! HTTP handlers for the prediction API

use axum::{
    body::Bytes,
    extract::State,
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{binary_flag, PredictResponse};
use crate::state::AppState;

/// Index banner
pub async fn index() -> Html<&'static str> {
    Html("<h1 style='color:blue'>同案智推API终端</h1>")
}

/// Classify a judgment document.
///
/// Body: the judgment XML. Malformed XML degrades to best-effort extraction
/// inside the pipeline and still produces a prediction.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<PredictResponse>, ApiError> {
    let xml = std::str::from_utf8(&body)
        .map_err(|_| ApiError::InvalidRequest("request body is not valid UTF-8".to_string()))?;

    // Demo cases answer from the preset table without touching the models.
    let title = judgment_pipeline::extract_title(xml);
    if let Some(tags) = state.presets.tags_for(&title) {
        tracing::info!("Preset answer for demo title: {}", title);
        return Ok(Json(PredictResponse::Preset { tags }));
    }

    let liability_tokens = state.pipeline.liability_features(xml);
    let label_1 = state.models.liability.predict(&liability_tokens);

    let multi_vehicle_tokens = state.pipeline.multi_vehicle_features(xml);
    let positive = state.models.multi_vehicle.predict_positive(&multi_vehicle_tokens);

    tracing::info!(
        label_1 = %label_1,
        multi_vehicle = positive,
        "prediction complete"
    );

    Ok(Json(PredictResponse::Scored {
        label_1,
        label_2: binary_flag(positive),
    }))
}
