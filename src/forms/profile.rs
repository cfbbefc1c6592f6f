use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::{phone_number as valid_phone, required_text, tax_id as valid_tax_id};

/// Company profile a business manager fills in after sign-up.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfileForm {
    #[validate(
        custom = "required_text",
        length(max = 200, message = "Company name must be at most 200 characters")
    )]
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,
    #[validate(custom = "valid_tax_id")]
    pub tax_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Website is not a valid URL"))]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Contact email is not valid"))]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom = "valid_phone")]
    pub phone_number: Option<String>,
}
