use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a crop season.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum CropSeasonStatus {
    Active,
    Paused,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// A farming cycle owned by one farmer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropSeason {
    pub crop_season_id: Uuid,
    #[serde(default)]
    pub season_code: Option<String>,
    pub season_name: String,
    #[serde(default)]
    pub farmer_name: Option<String>,
    #[serde(default)]
    pub area: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CropSeasonStatus,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub details: Vec<CropSeasonDetail>,
}

/// Land allocation of a crop season for a single coffee type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropSeasonDetail {
    pub detail_id: Uuid,
    #[serde(default)]
    pub crop_season_id: Option<Uuid>,
    #[serde(default)]
    pub coffee_type_name: Option<String>,
    #[serde(default)]
    pub area_allocated: Option<f64>,
    #[serde(default)]
    pub expected_harvest_start: Option<NaiveDate>,
    #[serde(default)]
    pub expected_harvest_end: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_yield: Option<f64>,
    #[serde(default)]
    pub actual_yield: Option<f64>,
    #[serde(default)]
    pub planting_status: Option<String>,
}

/// Stage definition of the growing sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropStage {
    pub stage_id: Uuid,
    pub stage_code: String,
    pub stage_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub order_index: i32,
}

/// A stage recorded against a crop-season detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropProgress {
    pub progress_id: Uuid,
    pub crop_season_detail_id: Uuid,
    pub stage_id: Uuid,
    #[serde(default)]
    pub stage_code: Option<String>,
    #[serde(default)]
    pub stage_name: Option<String>,
    #[serde(default)]
    pub progress_date: Option<NaiveDate>,
    #[serde(default)]
    pub actual_yield: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub updated_by_name: Option<String>,
}
