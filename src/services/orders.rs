use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::errors::ClientError;
use crate::models::Order;

const ORDERS_PATH: &str = "api/orders";

/// Read-only access to sales orders
#[derive(Clone)]
pub struct OrderService {
    client: Arc<ApiClient>,
}

impl OrderService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Order>, ClientError> {
        self.client.get(ORDERS_PATH).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, order_id: Uuid) -> Result<Order, ClientError> {
        self.client
            .get(&format!("{}/{}", ORDERS_PATH, order_id))
            .await
    }
}
