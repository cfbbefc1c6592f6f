use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::rules::{date_range, positive_quantity, present, required_text};
use crate::errors::ClientError;
use crate::models::CropStage;
use crate::workflow::is_harvesting;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "season_dates"))]
pub struct CropSeasonForm {
    #[validate(
        custom = "required_text",
        length(max = 100, message = "Season name must be at most 100 characters")
    )]
    pub season_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "positive_quantity")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Note must be at most 500 characters"))]
    pub note: Option<String>,
}

fn season_dates(form: &CropSeasonForm) -> Result<(), ValidationError> {
    date_range(form.start_date, form.end_date)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "harvest_window"))]
pub struct CropSeasonDetailForm {
    pub coffee_type_id: Option<Uuid>,
    #[validate(custom = "positive_quantity")]
    pub area_allocated: f64,
    pub expected_harvest_start: NaiveDate,
    pub expected_harvest_end: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "positive_quantity")]
    pub estimated_yield: Option<f64>,
}

fn harvest_window(form: &CropSeasonDetailForm) -> Result<(), ValidationError> {
    present(&form.coffee_type_id, "Coffee type is required")?;
    date_range(form.expected_harvest_start, form.expected_harvest_end)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "progress_selection"))]
pub struct CropProgressForm {
    pub crop_season_detail_id: Uuid,
    pub stage_id: Option<Uuid>,
    pub progress_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "positive_quantity")]
    pub actual_yield: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000, message = "Note must be at most 1000 characters"))]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Photo URL is not valid"))]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Video URL is not valid"))]
    pub video_url: Option<String>,
}

fn progress_selection(form: &CropProgressForm) -> Result<(), ValidationError> {
    present(&form.stage_id, "Stage is required")?;
    present(&form.progress_date, "Progress date is required")
}

impl CropProgressForm {
    /// Field checks plus the rules that depend on which stage is recorded.
    pub fn check_for_stage(&self, stage: &CropStage) -> Result<(), ClientError> {
        super::check(self)?;
        if self.stage_id != Some(stage.stage_id) {
            return Err(ClientError::Validation(format!(
                "Progress must be recorded for stage {}",
                stage.stage_name
            )));
        }
        if is_harvesting(stage) && self.actual_yield.is_none() {
            return Err(ClientError::Validation(
                "Actual yield is required at harvest".to_string(),
            ));
        }
        Ok(())
    }
}
