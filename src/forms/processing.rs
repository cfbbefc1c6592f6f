use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::rules::{positive_quantity, present, required_text};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "batch_selection"))]
pub struct ProcessingBatchForm {
    pub crop_season_id: Option<Uuid>,
    pub coffee_type_id: Option<Uuid>,
    pub method_id: Option<i32>,
    #[validate(custom = "positive_quantity")]
    pub input_quantity: f64,
    #[validate(custom = "required_text")]
    pub input_unit: String,
}

fn batch_selection(form: &ProcessingBatchForm) -> Result<(), ValidationError> {
    present(&form.crop_season_id, "Crop season is required")?;
    present(&form.coffee_type_id, "Coffee type is required")?;
    present(&form.method_id, "Processing method is required")
}
