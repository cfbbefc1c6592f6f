#![allow(dead_code)]

use std::sync::Arc;

use coffee_supply_client::{
    client::{ApiClient, StaticToken},
    models::{CropProgress, CropStage, UserRole},
    services::ServiceContainer,
};
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// Mock backend plus a service container pointed at it.
pub struct TestBackend {
    pub server: MockServer,
    pub services: ServiceContainer,
}

impl TestBackend {
    pub async fn new(actor: Option<UserRole>) -> Self {
        let server = MockServer::start().await;
        let client = ApiClient::new(&server.uri(), Arc::new(StaticToken::new(TOKEN)))
            .expect("mock server uri is a valid base url");
        let services = ServiceContainer::new(Arc::new(client), actor);
        Self { server, services }
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

pub fn shipment_json(id: Uuid, status: &str) -> Value {
    json!({
        "shipmentId": id,
        "shipmentCode": "SHIP-0001",
        "orderCode": "ORD-0001",
        "deliveryStatus": status,
        "shippedQuantity": 250.0,
        "deliveryStaffName": "Nguyễn Văn A",
        "shipmentDetails": [
            {"shipmentDetailId": Uuid::new_v4(), "quantity": 250.0, "unit": "kg"}
        ]
    })
}

pub fn stage(code: &str, order_index: i32) -> CropStage {
    CropStage {
        stage_id: Uuid::new_v4(),
        stage_code: code.to_string(),
        stage_name: code.to_string(),
        description: None,
        order_index,
    }
}

pub fn progress_at(detail: Uuid, stage: &CropStage) -> CropProgress {
    CropProgress {
        progress_id: Uuid::new_v4(),
        crop_season_detail_id: detail,
        stage_id: stage.stage_id,
        stage_code: Some(stage.stage_code.clone()),
        stage_name: None,
        progress_date: None,
        actual_yield: None,
        note: None,
        photo_url: None,
        video_url: None,
        updated_by_name: None,
    }
}
