use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-only metadata card for one of the on-device inference models.
/// Accuracy figures are static reference data in this simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiModel {
    pub key: String,
    pub name: String,
    pub accuracy: f64,
    pub status: String,
    pub last_trained: NaiveDate,
}
