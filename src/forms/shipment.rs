use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::rules::{error, positive_quantity, present};
use crate::workflow::DeliveryStatus;

/// Detail quantities may differ from the total by float noise only.
const QUANTITY_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "shipment_payload"))]
pub struct CreateShipmentForm {
    pub order_id: Option<Uuid>,
    pub delivery_staff_id: Option<Uuid>,
    #[validate(custom = "positive_quantity")]
    pub shipped_quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipped_at: Option<NaiveDateTime>,
    #[validate(length(min = 1, message = "Add at least one shipment line"))]
    pub shipment_details: Vec<ShipmentDetailForm>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDetailForm {
    pub order_item_id: Uuid,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

fn shipment_payload(form: &CreateShipmentForm) -> Result<(), ValidationError> {
    present(&form.order_id, "Order is required")?;
    present(&form.delivery_staff_id, "Delivery staff is required")?;
    for detail in &form.shipment_details {
        positive_quantity(detail.quantity)
            .map_err(|_| error("detail_quantity", "Every shipment line needs a positive quantity"))?;
    }
    let total: f64 = form.shipment_details.iter().map(|d| d.quantity).sum();
    if (total - form.shipped_quantity).abs() > QUANTITY_TOLERANCE {
        return Err(error(
            "detail_total",
            "Shipment lines must add up to the shipped quantity",
        ));
    }
    Ok(())
}

/// Requested move of a shipment to a new delivery status.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "status_payload"))]
pub struct UpdateDeliveryStatusForm {
    pub delivery_status: DeliveryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Note must be at most 500 characters"))]
    pub note: Option<String>,
}

impl UpdateDeliveryStatusForm {
    pub fn to(status: DeliveryStatus) -> Self {
        Self {
            delivery_status: status,
            received_at: None,
            note: None,
        }
    }
}

fn status_payload(form: &UpdateDeliveryStatusForm) -> Result<(), ValidationError> {
    if !form.delivery_status.is_known() {
        return Err(error("delivery_status", "Choose a delivery status"));
    }
    if form.received_at.is_some() && form.delivery_status != DeliveryStatus::Delivered {
        return Err(error(
            "received_at",
            "Received time can only be set when the shipment is delivered",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClientError;
    use crate::forms::check;
    use assert_matches::assert_matches;

    fn line(quantity: f64) -> ShipmentDetailForm {
        ShipmentDetailForm {
            order_item_id: Uuid::new_v4(),
            quantity,
            unit: Some("Kg".to_string()),
            note: None,
        }
    }

    fn shipment(total: f64, lines: Vec<ShipmentDetailForm>) -> CreateShipmentForm {
        CreateShipmentForm {
            order_id: Some(Uuid::new_v4()),
            delivery_staff_id: Some(Uuid::new_v4()),
            shipped_quantity: total,
            shipped_at: None,
            shipment_details: lines,
        }
    }

    #[test]
    fn balanced_shipment_passes() {
        let form = shipment(1000.0, vec![line(600.0), line(400.0)]);
        assert!(check(&form).is_ok());
    }

    #[test]
    fn unbalanced_lines_are_rejected() {
        let form = shipment(1000.0, vec![line(600.0)]);
        assert_matches!(
            check(&form),
            Err(ClientError::Validation(msg)) if msg.contains("add up")
        );
    }

    #[test]
    fn empty_lines_are_rejected() {
        let form = shipment(10.0, vec![]);
        assert_matches!(
            check(&form),
            Err(ClientError::Validation(msg)) if msg == "Add at least one shipment line"
        );
    }

    #[test]
    fn missing_order_is_rejected() {
        let mut form = shipment(5.0, vec![line(5.0)]);
        form.order_id = None;
        assert_matches!(
            check(&form),
            Err(ClientError::Validation(msg)) if msg == "Order is required"
        );
    }

    #[test]
    fn received_at_only_with_delivered() {
        let at = NaiveDateTime::parse_from_str("2025-06-02 09:15:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let mut form = UpdateDeliveryStatusForm::to(DeliveryStatus::Failed);
        form.received_at = Some(at);
        assert!(check(&form).is_err());

        form.delivery_status = DeliveryStatus::Delivered;
        assert!(check(&form).is_ok());
    }

    #[test]
    fn unknown_target_status_is_rejected() {
        let form = UpdateDeliveryStatusForm::to(DeliveryStatus::Unknown);
        assert!(check(&form).is_err());
    }
}
