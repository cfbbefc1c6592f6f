use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::rules::{error, required_text};
use crate::models::{ReportType, SeverityLevel};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "report_target"))]
pub struct FarmerReportForm {
    #[validate(length(
        min = 3,
        max = 200,
        message = "Title must be between 3 and 200 characters"
    ))]
    pub title: String,
    #[validate(custom = "required_text")]
    pub description: String,
    pub report_type: ReportType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity_level: Option<SeverityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_progress_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_progress_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Image URL is not valid"))]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Video URL is not valid"))]
    pub video_url: Option<String>,
}

/// A report points at exactly the progress record its type names.
fn report_target(form: &FarmerReportForm) -> Result<(), ValidationError> {
    match form.report_type {
        ReportType::Crop if form.crop_progress_id.is_none() => Err(error(
            "report_target",
            "Choose the crop progress this report is about",
        )),
        ReportType::Processing if form.processing_progress_id.is_none() => Err(error(
            "report_target",
            "Choose the processing step this report is about",
        )),
        ReportType::Unknown => Err(error("report_type", "Report type is not supported")),
        _ => Ok(()),
    }
}
