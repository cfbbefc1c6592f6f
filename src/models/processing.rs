use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ProcessingBatchStatus {
    NotStarted,
    InProgress,
    Completed,
    AwaitingEvaluation,
    #[serde(other)]
    Unknown,
}

/// A post-harvest processing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingBatch {
    pub batch_id: Uuid,
    pub batch_code: String,
    #[serde(default)]
    pub system_batch_code: Option<String>,
    #[serde(default)]
    pub crop_season_id: Option<Uuid>,
    #[serde(default)]
    pub crop_season_name: Option<String>,
    #[serde(default)]
    pub coffee_type_id: Option<Uuid>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub method_id: Option<i32>,
    #[serde(default)]
    pub method_name: Option<String>,
    #[serde(default)]
    pub input_quantity: f64,
    #[serde(default)]
    pub input_unit: Option<String>,
    pub status: ProcessingBatchStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
