use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum InboundRequestStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl InboundRequestStatus {
    /// Only a request nobody has acted on can be withdrawn by the farmer.
    pub fn can_cancel(self) -> bool {
        self == InboundRequestStatus::Pending
    }

    /// Staff approve or reject pending requests only.
    pub fn can_review(self) -> bool {
        self == InboundRequestStatus::Pending
    }
}

/// A farmer's request to deposit processed coffee into a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseInboundRequest {
    pub inbound_request_id: Uuid,
    #[serde(default)]
    pub inbound_request_code: Option<String>,
    #[serde(default)]
    pub batch_id: Option<Uuid>,
    #[serde(default)]
    pub batch_code: Option<String>,
    #[serde(default)]
    pub farmer_name: Option<String>,
    pub requested_quantity: f64,
    #[serde(default)]
    pub preferred_delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub actual_delivery_date: Option<NaiveDate>,
    pub status: InboundRequestStatus,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
