//! Form payloads and their pre-submission checks.
//!
//! A form that fails [`check`] is never sent; the first message is surfaced
//! as [`ClientError::Validation`].

pub mod auth;
pub mod crop;
pub mod processing;
pub mod profile;
pub mod report;
pub mod rules;
pub mod shipment;
pub mod warehouse;

use validator::{Validate, ValidationErrors};

use crate::errors::ClientError;

pub use auth::LoginForm;
pub use crop::{CropProgressForm, CropSeasonDetailForm, CropSeasonForm};
pub use processing::ProcessingBatchForm;
pub use profile::BusinessProfileForm;
pub use report::FarmerReportForm;
pub use shipment::{CreateShipmentForm, ShipmentDetailForm, UpdateDeliveryStatusForm};
pub use warehouse::{RejectInboundForm, WarehouseInboundRequestForm};

/// Struct-level (schema) errors are filed under this key.
const SCHEMA_KEY: &str = "__all__";

/// Picks a single message to show from a set of validation errors.
///
/// Field errors come first in field-name order, struct-level errors last,
/// so the same form always yields the same message.
pub fn first_message(errors: &ValidationErrors) -> Option<String> {
    let field_errors = errors.field_errors();
    let mut fields: Vec<&&str> = field_errors.keys().collect();
    fields.sort_by_key(|field| (**field == SCHEMA_KEY, **field));

    fields.into_iter().find_map(|field| {
        field_errors.get(*field).and_then(|errs| errs.first()).map(|err| {
            err.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field))
        })
    })
}

/// Runs the derived validation and converts a failure into a client error.
pub fn check<T: Validate>(form: &T) -> Result<(), ClientError> {
    form.validate().map_err(ClientError::from)
}
