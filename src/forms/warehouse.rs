use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::rules::{not_before, positive_quantity, present, required_text};
use crate::errors::ClientError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "batch_selected"))]
pub struct WarehouseInboundRequestForm {
    pub batch_id: Option<Uuid>,
    #[validate(custom = "positive_quantity")]
    pub requested_quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_delivery_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Note must be at most 500 characters"))]
    pub note: Option<String>,
}

fn batch_selected(form: &WarehouseInboundRequestForm) -> Result<(), ValidationError> {
    present(&form.batch_id, "Processing batch is required")
}

impl WarehouseInboundRequestForm {
    /// Field checks plus the delivery date, which must not lie before `today`.
    pub fn check_on(&self, today: NaiveDate) -> Result<(), ClientError> {
        super::check(self)?;
        if let Some(date) = self.preferred_delivery_date {
            not_before(date, today).map_err(|err| {
                ClientError::Validation(
                    err.message
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Preferred delivery date is not valid".to_string()),
                )
            })?;
        }
        Ok(())
    }
}

/// Reason staff give when turning a request down.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RejectInboundForm {
    #[validate(
        custom = "required_text",
        length(max = 500, message = "Reason must be at most 500 characters")
    )]
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn request() -> WarehouseInboundRequestForm {
        WarehouseInboundRequestForm {
            batch_id: Some(Uuid::new_v4()),
            requested_quantity: 500.0,
            preferred_delivery_date: Some(today()),
            note: None,
        }
    }

    #[test]
    fn request_for_today_passes() {
        assert!(request().check_on(today()).is_ok());
    }

    #[test]
    fn past_delivery_date_is_rejected() {
        let mut form = request();
        form.preferred_delivery_date = today().pred_opt();
        assert_matches!(
            form.check_on(today()),
            Err(ClientError::Validation(msg)) if msg == "Date cannot be in the past"
        );
    }

    #[test]
    fn zero_quantity_is_rejected_before_date_check() {
        let mut form = request();
        form.requested_quantity = 0.0;
        form.preferred_delivery_date = today().pred_opt();
        assert_matches!(
            form.check_on(today()),
            Err(ClientError::Validation(msg)) if msg == "Quantity must be greater than zero"
        );
    }

    #[test]
    fn request_needs_a_batch() {
        let mut form = request();
        form.batch_id = None;
        assert_matches!(
            form.check_on(today()),
            Err(ClientError::Validation(msg)) if msg == "Processing batch is required"
        );
    }

    #[test]
    fn rejection_needs_a_reason() {
        let form = RejectInboundForm {
            reason: String::new(),
        };
        assert!(crate::forms::check(&form).is_err());
    }
}
