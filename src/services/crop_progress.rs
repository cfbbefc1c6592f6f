use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::authorize;
use crate::client::ApiClient;
use crate::dashboard::perm;
use crate::errors::ClientError;
use crate::forms::{check, CropProgressForm};
use crate::models::{CropProgress, CropStage, UserRole};
use crate::workflow::{next_stage, NextStage};

const STAGES_PATH: &str = "api/crop-stages";
const PROGRESS_PATH: &str = "api/crop-progress";

/// Service for recording growth stages against a crop-season detail
#[derive(Clone)]
pub struct CropProgressService {
    client: Arc<ApiClient>,
    actor: Option<UserRole>,
}

impl CropProgressService {
    pub fn new(client: Arc<ApiClient>, actor: Option<UserRole>) -> Self {
        Self { client, actor }
    }

    #[instrument(skip(self))]
    pub async fn stages(&self) -> Result<Vec<CropStage>, ClientError> {
        self.client.get(STAGES_PATH).await
    }

    #[instrument(skip(self))]
    pub async fn list_for_detail(&self, detail_id: Uuid) -> Result<Vec<CropProgress>, ClientError> {
        authorize(self.actor, perm::CROP_PROGRESS_READ)?;
        self.client
            .get(&format!("{}/by-detail/{}", PROGRESS_PATH, detail_id))
            .await
    }

    /// Stage to record next for `detail_id`; `None` once every stage is done.
    #[instrument(skip(self))]
    pub async fn next_stage(&self, detail_id: Uuid) -> Result<Option<CropStage>, ClientError> {
        let stages = self.stages().await?;
        let progress = self.list_for_detail(detail_id).await?;
        Ok(next_stage(&stages, &progress)?.stage().cloned())
    }

    /// Records progress, provided it is for the stage that comes next.
    #[instrument(skip(self, form), fields(detail_id = %form.crop_season_detail_id))]
    pub async fn record(&self, form: &CropProgressForm) -> Result<CropProgress, ClientError> {
        authorize(self.actor, perm::CROP_PROGRESS_WRITE)?;
        check(form)?;

        let stages = self.stages().await?;
        let progress = self.list_for_detail(form.crop_season_detail_id).await?;
        let stage = match next_stage(&stages, &progress)? {
            NextStage::Stage(stage) => stage,
            NextStage::AllComplete => {
                return Err(ClientError::Validation(
                    "Every stage of this crop has already been recorded".to_string(),
                ))
            }
        };
        debug!(stage = %stage.stage_code, "expected next stage");
        form.check_for_stage(stage)?;

        let recorded: CropProgress = self.client.post(PROGRESS_PATH, form).await?;
        info!(progress_id = %recorded.progress_id, stage = %stage.stage_code, "crop progress recorded");
        Ok(recorded)
    }

    #[instrument(skip(self, form))]
    pub async fn update(
        &self,
        progress_id: Uuid,
        form: &CropProgressForm,
    ) -> Result<CropProgress, ClientError> {
        authorize(self.actor, perm::CROP_PROGRESS_WRITE)?;
        check(form)?;
        self.client
            .put(&format!("{}/{}", PROGRESS_PATH, progress_id), form)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, progress_id: Uuid) -> Result<(), ClientError> {
        authorize(self.actor, perm::CROP_PROGRESS_WRITE)?;
        self.client
            .delete(&format!("{}/{}", PROGRESS_PATH, progress_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StaticToken;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DETAIL: &str = "5a0f3f6c-7d0c-4c2a-9a3d-2b1c0d9e8f7a";
    const PLANTING: &str = "11111111-1111-4111-8111-111111111111";
    const FLOWERING: &str = "22222222-2222-4222-8222-222222222222";

    async fn backend(progress: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/crop-stages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"stageId": FLOWERING, "stageCode": "FLOWERING", "stageName": "Ra hoa", "orderIndex": 1},
                {"stageId": PLANTING, "stageCode": "PLANTING", "stageName": "Gieo trồng", "orderIndex": 0}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/api/crop-progress/by-detail/{}", DETAIL)))
            .respond_with(ResponseTemplate::new(200).set_body_json(progress))
            .mount(&server)
            .await;
        server
    }

    fn service(server: &MockServer) -> CropProgressService {
        let client = ApiClient::new(&server.uri(), Arc::new(StaticToken::new("t"))).unwrap();
        CropProgressService::new(Arc::new(client), None)
    }

    fn form(stage: &str) -> CropProgressForm {
        CropProgressForm {
            crop_season_detail_id: Uuid::parse_str(DETAIL).unwrap(),
            stage_id: Some(Uuid::parse_str(stage).unwrap()),
            progress_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            actual_yield: None,
            note: None,
            photo_url: None,
            video_url: None,
        }
    }

    #[tokio::test]
    async fn next_stage_is_planting_without_progress() {
        let server = backend(json!([])).await;
        let detail = Uuid::parse_str(DETAIL).unwrap();
        let stage = service(&server).next_stage(detail).await.unwrap().unwrap();
        assert_eq!(stage.stage_code, "PLANTING");
    }

    #[tokio::test]
    async fn out_of_sequence_stage_is_rejected_before_posting() {
        let server = backend(json!([])).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let result = service(&server).record(&form(FLOWERING)).await;
        assert_matches!(result, Err(ClientError::Validation(msg)) if msg.contains("Gieo trồng"));
    }

    #[tokio::test]
    async fn record_posts_when_stage_matches() {
        let server = backend(json!([
            {"progressId": "33333333-3333-4333-8333-333333333333", "cropSeasonDetailId": DETAIL, "stageId": PLANTING}
        ]))
        .await;
        Mock::given(method("POST"))
            .and(path("/api/crop-progress"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "progressId": "44444444-4444-4444-8444-444444444444",
                "cropSeasonDetailId": DETAIL,
                "stageId": FLOWERING
            })))
            .expect(1)
            .mount(&server)
            .await;

        let recorded = service(&server).record(&form(FLOWERING)).await.unwrap();
        assert_eq!(recorded.stage_id, Uuid::parse_str(FLOWERING).unwrap());
    }

    #[tokio::test]
    async fn completed_detail_refuses_more_progress() {
        let server = backend(json!([
            {"progressId": "33333333-3333-4333-8333-333333333333", "cropSeasonDetailId": DETAIL, "stageId": FLOWERING}
        ]))
        .await;
        let detail = Uuid::parse_str(DETAIL).unwrap();
        assert!(service(&server).next_stage(detail).await.unwrap().is_none());
        assert_matches!(
            service(&server).record(&form(FLOWERING)).await,
            Err(ClientError::Validation(_))
        );
    }
}
