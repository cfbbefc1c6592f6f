use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::authorize;
use crate::client::ApiClient;
use crate::dashboard::perm;
use crate::errors::ClientError;
use crate::forms::{check, FarmerReportForm};
use crate::models::{FarmerReport, UserRole};

const REPORTS_PATH: &str = "api/farmer-reports";

/// Problem reports farmers raise for agricultural experts
#[derive(Clone)]
pub struct FarmerReportService {
    client: Arc<ApiClient>,
    actor: Option<UserRole>,
}

impl FarmerReportService {
    pub fn new(client: Arc<ApiClient>, actor: Option<UserRole>) -> Self {
        Self { client, actor }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<FarmerReport>, ClientError> {
        authorize(self.actor, perm::REPORTS_READ)?;
        self.client.get(REPORTS_PATH).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, report_id: Uuid) -> Result<FarmerReport, ClientError> {
        authorize(self.actor, perm::REPORTS_READ)?;
        self.client
            .get(&format!("{}/{}", REPORTS_PATH, report_id))
            .await
    }

    #[instrument(skip(self, form), fields(report_type = %form.report_type))]
    pub async fn create(&self, form: &FarmerReportForm) -> Result<FarmerReport, ClientError> {
        authorize(self.actor, perm::REPORTS_WRITE)?;
        check(form)?;
        let report: FarmerReport = self.client.post(REPORTS_PATH, form).await?;
        info!(report_id = %report.report_id, "farmer report submitted");
        Ok(report)
    }

    #[instrument(skip(self, form))]
    pub async fn update(
        &self,
        report_id: Uuid,
        form: &FarmerReportForm,
    ) -> Result<FarmerReport, ClientError> {
        authorize(self.actor, perm::REPORTS_WRITE)?;
        check(form)?;
        self.client
            .put(&format!("{}/{}", REPORTS_PATH, report_id), form)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, report_id: Uuid) -> Result<(), ClientError> {
        authorize(self.actor, perm::REPORTS_WRITE)?;
        self.client
            .delete(&format!("{}/{}", REPORTS_PATH, report_id))
            .await
    }
}
