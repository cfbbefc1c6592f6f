use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a signed-in user holds; selects which dashboard is shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum UserRole {
    Admin,
    BusinessManager,
    BusinessStaff,
    Farmer,
    AgriculturalExpert,
    DeliveryStaff,
    #[serde(other)]
    Unknown,
}

/// Successful sign-in payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(alias = "roleName")]
    pub role: UserRole,
}

/// Company profile as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub company_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub company_address: Option<String>,
    pub tax_id: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_accepts_backend_role_name() {
        let body = r#"{"accessToken":"abc","roleName":"DeliveryStaff"}"#;
        let login: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(login.role, UserRole::DeliveryStaff);
        assert_eq!(UserRole::from_str("farmer").unwrap(), UserRole::Farmer);
    }
}
