use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use crate::workflow::DeliveryStatus;

/// One delivery leg of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub shipment_id: Uuid,
    pub shipment_code: String,
    #[serde(default)]
    pub order_id: Option<Uuid>,
    #[serde(default)]
    pub order_code: String,
    #[serde(default)]
    pub delivery_staff_id: Option<Uuid>,
    #[serde(default)]
    pub delivery_staff_name: Option<String>,
    pub delivery_status: DeliveryStatus,
    #[serde(default)]
    pub shipped_quantity: f64,
    #[serde(default)]
    pub shipped_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub received_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub shipment_details: Vec<ShipmentDetail>,
}

impl Shipment {
    pub fn is_terminal(&self) -> bool {
        self.delivery_status.is_terminal()
    }

    pub fn detail_quantity(&self) -> f64 {
        self.shipment_details.iter().map(|d| d.quantity).sum()
    }
}

/// Line of a shipment, tied to an order item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDetail {
    pub shipment_detail_id: Uuid,
    #[serde(default)]
    pub order_item_id: Option<Uuid>,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}
