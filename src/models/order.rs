use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Enum representing the possible statuses of an order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Shipping,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// A sales order placed against a business contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Uuid,
    pub order_code: String,
    #[serde(default)]
    pub contract_code: Option<String>,
    #[serde(default)]
    pub buyer_name: Option<String>,
    #[serde(default)]
    pub order_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    pub status: OrderStatus,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub order_item_id: Uuid,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: f64,
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub total_price: Option<Decimal>,
}
