use reqwest::Method;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::authorize;
use crate::client::ApiClient;
use crate::dashboard::perm;
use crate::errors::ClientError;
use crate::forms::{check, CreateShipmentForm, UpdateDeliveryStatusForm};
use crate::models::{DeliveryStatus, Shipment, UserRole};

const SHIPMENTS_PATH: &str = "api/shipments";

/// Service for reading shipments and requesting status changes
#[derive(Clone)]
pub struct ShipmentService {
    client: Arc<ApiClient>,
    actor: Option<UserRole>,
}

impl ShipmentService {
    pub fn new(client: Arc<ApiClient>, actor: Option<UserRole>) -> Self {
        Self { client, actor }
    }

    /// Lists shipments, optionally narrowed to one status by the backend
    #[instrument(skip(self))]
    pub async fn list(&self, status: Option<DeliveryStatus>) -> Result<Vec<Shipment>, ClientError> {
        authorize(self.actor, perm::SHIPMENTS_READ)?;
        match status {
            Some(status) => {
                let status: &str = status.as_ref();
                self.client
                    .get_query(SHIPMENTS_PATH, &[("status", status)])
                    .await
            }
            None => self.client.get(SHIPMENTS_PATH).await,
        }
    }

    /// Shipments assigned to the signed-in delivery staff member
    #[instrument(skip(self))]
    pub async fn list_assigned(&self) -> Result<Vec<Shipment>, ClientError> {
        authorize(self.actor, perm::SHIPMENTS_READ)?;
        self.client
            .get(&format!("{}/delivery-staff", SHIPMENTS_PATH))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, shipment_id: Uuid) -> Result<Shipment, ClientError> {
        authorize(self.actor, perm::SHIPMENTS_READ)?;
        self.client
            .get(&format!("{}/{}", SHIPMENTS_PATH, shipment_id))
            .await
    }

    #[instrument(skip(self, form))]
    pub async fn create(&self, form: &CreateShipmentForm) -> Result<Shipment, ClientError> {
        authorize(self.actor, perm::SHIPMENTS_CREATE)?;
        check(form)?;
        let shipment: Shipment = self.client.post(SHIPMENTS_PATH, form).await?;
        info!(shipment_id = %shipment.shipment_id, "shipment created");
        Ok(shipment)
    }

    /// Moves `shipment` to the status in `form`.
    ///
    /// Illegal transitions are refused here without contacting the backend.
    #[instrument(skip(self, shipment), fields(shipment_id = %shipment.shipment_id))]
    pub async fn update_status(
        &self,
        shipment: &Shipment,
        form: &UpdateDeliveryStatusForm,
    ) -> Result<Shipment, ClientError> {
        authorize(self.actor, perm::SHIPMENTS_UPDATE_STATUS)?;
        check(form)?;

        let from = shipment.delivery_status;
        let to = form.delivery_status;
        if !from.can_transition_to(to) {
            warn!(%from, %to, "refusing illegal delivery status transition");
            return Err(ClientError::InvalidTransition { from, to });
        }

        let updated: Shipment = self
            .client
            .put(
                &format!("{}/{}/status", SHIPMENTS_PATH, shipment.shipment_id),
                form,
            )
            .await?;
        info!(%from, to = %updated.delivery_status, "delivery status updated");
        Ok(updated)
    }

    /// Only shipments that have not left yet may be removed.
    #[instrument(skip(self, shipment), fields(shipment_id = %shipment.shipment_id))]
    pub async fn delete(&self, shipment: &Shipment) -> Result<(), ClientError> {
        authorize(self.actor, perm::SHIPMENTS_DELETE)?;
        if shipment.delivery_status != DeliveryStatus::Pending {
            return Err(ClientError::InvalidOperation(format!(
                "Shipment {} is {} and can no longer be deleted",
                shipment.shipment_code, shipment.delivery_status
            )));
        }
        self.client
            .delete(&format!("{}/{}", SHIPMENTS_PATH, shipment.shipment_id))
            .await
    }

    /// Marks a shipment received by the buyer; shorthand for a Delivered update.
    #[instrument(skip(self, shipment), fields(shipment_id = %shipment.shipment_id))]
    pub async fn confirm_received(
        &self,
        shipment: &Shipment,
        note: Option<String>,
    ) -> Result<(), ClientError> {
        let mut form = UpdateDeliveryStatusForm::to(DeliveryStatus::Delivered);
        form.note = note;
        authorize(self.actor, perm::SHIPMENTS_UPDATE_STATUS)?;
        check(&form)?;
        if !shipment.delivery_status.can_transition_to(DeliveryStatus::Delivered) {
            return Err(ClientError::InvalidTransition {
                from: shipment.delivery_status,
                to: DeliveryStatus::Delivered,
            });
        }
        self.client
            .send_empty(
                Method::PATCH,
                &format!("{}/{}/received", SHIPMENTS_PATH, shipment.shipment_id),
                &form,
            )
            .await
    }
}
