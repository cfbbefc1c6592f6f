use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::authorize;
use crate::client::ApiClient;
use crate::dashboard::perm;
use crate::errors::ClientError;
use crate::forms::{check, ProcessingBatchForm};
use crate::models::{ProcessingBatch, UserRole};

const BATCHES_PATH: &str = "api/processing-batches";

#[derive(Clone)]
pub struct ProcessingBatchService {
    client: Arc<ApiClient>,
    actor: Option<UserRole>,
}

impl ProcessingBatchService {
    pub fn new(client: Arc<ApiClient>, actor: Option<UserRole>) -> Self {
        Self { client, actor }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ProcessingBatch>, ClientError> {
        authorize(self.actor, perm::BATCHES_READ)?;
        self.client.get(BATCHES_PATH).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, batch_id: Uuid) -> Result<ProcessingBatch, ClientError> {
        authorize(self.actor, perm::BATCHES_READ)?;
        self.client
            .get(&format!("{}/{}", BATCHES_PATH, batch_id))
            .await
    }

    #[instrument(skip(self, form))]
    pub async fn create(&self, form: &ProcessingBatchForm) -> Result<ProcessingBatch, ClientError> {
        authorize(self.actor, perm::BATCHES_WRITE)?;
        check(form)?;
        let batch: ProcessingBatch = self.client.post(BATCHES_PATH, form).await?;
        info!(batch_id = %batch.batch_id, batch_code = %batch.batch_code, "processing batch created");
        Ok(batch)
    }

    #[instrument(skip(self, form))]
    pub async fn update(
        &self,
        batch_id: Uuid,
        form: &ProcessingBatchForm,
    ) -> Result<ProcessingBatch, ClientError> {
        authorize(self.actor, perm::BATCHES_WRITE)?;
        check(form)?;
        self.client
            .put(&format!("{}/{}", BATCHES_PATH, batch_id), form)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, batch_id: Uuid) -> Result<(), ClientError> {
        authorize(self.actor, perm::BATCHES_WRITE)?;
        self.client
            .delete(&format!("{}/{}", BATCHES_PATH, batch_id))
            .await
    }
}
