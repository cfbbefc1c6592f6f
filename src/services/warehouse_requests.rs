use chrono::{Local, NaiveDate};
use reqwest::Method;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::authorize;
use crate::client::ApiClient;
use crate::dashboard::perm;
use crate::errors::ClientError;
use crate::forms::{check, RejectInboundForm, WarehouseInboundRequestForm};
use crate::models::{UserRole, WarehouseInboundRequest};

const INBOUND_PATH: &str = "api/warehouse-inbound-requests";

/// Farmers' requests to deposit processed coffee, and staff review of them
#[derive(Clone)]
pub struct WarehouseRequestService {
    client: Arc<ApiClient>,
    actor: Option<UserRole>,
}

impl WarehouseRequestService {
    pub fn new(client: Arc<ApiClient>, actor: Option<UserRole>) -> Self {
        Self { client, actor }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<WarehouseInboundRequest>, ClientError> {
        authorize(self.actor, perm::INBOUND_READ)?;
        self.client.get(INBOUND_PATH).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, request_id: Uuid) -> Result<WarehouseInboundRequest, ClientError> {
        authorize(self.actor, perm::INBOUND_READ)?;
        self.client
            .get(&format!("{}/{}", INBOUND_PATH, request_id))
            .await
    }

    /// Submits a request, checking the delivery date against the local date.
    pub async fn create(
        &self,
        form: &WarehouseInboundRequestForm,
    ) -> Result<WarehouseInboundRequest, ClientError> {
        self.create_on(form, Local::now().date_naive()).await
    }

    #[instrument(skip(self, form))]
    pub async fn create_on(
        &self,
        form: &WarehouseInboundRequestForm,
        today: NaiveDate,
    ) -> Result<WarehouseInboundRequest, ClientError> {
        authorize(self.actor, perm::INBOUND_CREATE)?;
        form.check_on(today)?;
        let request: WarehouseInboundRequest = self.client.post(INBOUND_PATH, form).await?;
        info!(request_id = %request.inbound_request_id, "inbound request submitted");
        Ok(request)
    }

    #[instrument(skip(self, request), fields(request_id = %request.inbound_request_id))]
    pub async fn cancel(&self, request: &WarehouseInboundRequest) -> Result<(), ClientError> {
        authorize(self.actor, perm::INBOUND_CANCEL)?;
        if !request.status.can_cancel() {
            return Err(not_pending(request, "cancelled"));
        }
        self.client
            .send_bare(
                Method::PUT,
                &format!("{}/{}/cancel", INBOUND_PATH, request.inbound_request_id),
            )
            .await
    }

    #[instrument(skip(self, request), fields(request_id = %request.inbound_request_id))]
    pub async fn approve(&self, request: &WarehouseInboundRequest) -> Result<(), ClientError> {
        authorize(self.actor, perm::INBOUND_REVIEW)?;
        if !request.status.can_review() {
            return Err(not_pending(request, "approved"));
        }
        self.client
            .send_bare(
                Method::PUT,
                &format!("{}/{}/approve", INBOUND_PATH, request.inbound_request_id),
            )
            .await
    }

    #[instrument(skip(self, request, form), fields(request_id = %request.inbound_request_id))]
    pub async fn reject(
        &self,
        request: &WarehouseInboundRequest,
        form: &RejectInboundForm,
    ) -> Result<(), ClientError> {
        authorize(self.actor, perm::INBOUND_REVIEW)?;
        check(form)?;
        if !request.status.can_review() {
            return Err(not_pending(request, "rejected"));
        }
        self.client
            .send_empty(
                Method::PUT,
                &format!("{}/{}/reject", INBOUND_PATH, request.inbound_request_id),
                form,
            )
            .await
    }
}

fn not_pending(request: &WarehouseInboundRequest, action: &str) -> ClientError {
    warn!(status = %request.status, action, "inbound request is not pending");
    ClientError::InvalidOperation(format!(
        "Only pending requests can be {}; this one is {}",
        action, request.status
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StaticToken;
    use crate::models::InboundRequestStatus;
    use assert_matches::assert_matches;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const REQUEST_ID: &str = "7e9f0a1b-2c3d-4e5f-8a9b-0c1d2e3f4a5b";

    fn request(status: InboundRequestStatus) -> WarehouseInboundRequest {
        serde_json::from_value(json!({
            "inboundRequestId": REQUEST_ID,
            "requestedQuantity": 1200.0,
            "status": status.to_string()
        }))
        .unwrap()
    }

    fn service(server: &MockServer, actor: UserRole) -> WarehouseRequestService {
        let client = ApiClient::new(&server.uri(), Arc::new(StaticToken::new("t"))).unwrap();
        WarehouseRequestService::new(Arc::new(client), Some(actor))
    }

    #[tokio::test]
    async fn pending_request_can_be_cancelled() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/warehouse-inbound-requests/{}/cancel", REQUEST_ID)))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        service(&server, UserRole::Farmer)
            .cancel(&request(InboundRequestStatus::Pending))
            .await
            .unwrap();

        let received = server.received_requests().await.unwrap();
        assert!(received[0].body.is_empty());
        assert!(received[0].headers.get("content-type").is_none());
    }

    #[tokio::test]
    async fn approval_sends_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/warehouse-inbound-requests/{}/approve", REQUEST_ID)))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        service(&server, UserRole::BusinessStaff)
            .approve(&request(InboundRequestStatus::Pending))
            .await
            .unwrap();

        let received = server.received_requests().await.unwrap();
        assert!(received[0].body.is_empty());
    }

    #[tokio::test]
    async fn approved_request_cannot_be_cancelled() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let result = service(&server, UserRole::Farmer)
            .cancel(&request(InboundRequestStatus::Approved))
            .await;
        assert_matches!(result, Err(ClientError::InvalidOperation(_)));
    }

    #[tokio::test]
    async fn past_delivery_date_is_rejected() {
        let server = MockServer::start().await;
        let form = WarehouseInboundRequestForm {
            batch_id: Some(Uuid::new_v4()),
            requested_quantity: 300.0,
            preferred_delivery_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            note: None,
        };
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let result = service(&server, UserRole::Farmer).create_on(&form, today).await;
        assert_matches!(result, Err(ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn staff_reject_sends_reason() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("/api/warehouse-inbound-requests/{}/reject", REQUEST_ID)))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        service(&server, UserRole::BusinessStaff)
            .reject(
                &request(InboundRequestStatus::Pending),
                &RejectInboundForm {
                    reason: "Warehouse full".to_string(),
                },
            )
            .await
            .unwrap();
    }
}
