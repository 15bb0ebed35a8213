//! Response types for the prediction API

use serde::Serialize;

/// `/api/predict` response body.
///
/// Documents whose title matches a preset demo case answer with a tag list;
/// everything else gets the two classifier outputs.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Preset { tags: Vec<String> },
    Scored { label_1: String, label_2: String },
}

/// Human-readable binary flag for the multiple-vehicle classifier.
pub fn binary_flag(positive: bool) -> String {
    if positive { "是" } else { "否" }.to_string()
}
