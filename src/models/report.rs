use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a farmer technical report is about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ReportType {
    /// Problem observed during a crop stage.
    Crop,
    /// Problem observed during post-harvest processing.
    Processing,
    #[serde(other)]
    Unknown,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

/// A farmer's technical report, optionally answered by an expert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerReport {
    pub report_id: Uuid,
    #[serde(default)]
    pub report_code: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub report_type: ReportType,
    #[serde(default)]
    pub severity_level: Option<SeverityLevel>,
    #[serde(default)]
    pub crop_progress_id: Option<Uuid>,
    #[serde(default)]
    pub processing_progress_id: Option<Uuid>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub reported_by_name: Option<String>,
    #[serde(default)]
    pub reported_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_resolved: Option<bool>,
}
