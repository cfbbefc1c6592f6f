use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::authorize;
use crate::client::ApiClient;
use crate::dashboard::perm;
use crate::errors::ClientError;
use crate::forms::{check, CropSeasonDetailForm, CropSeasonForm};
use crate::models::{CropSeason, CropSeasonDetail, UserRole};

const SEASONS_PATH: &str = "api/crop-seasons";
const DETAILS_PATH: &str = "api/crop-season-details";

/// Service for a farmer's crop seasons and their per-variety details
#[derive(Clone)]
pub struct CropSeasonService {
    client: Arc<ApiClient>,
    actor: Option<UserRole>,
}

impl CropSeasonService {
    pub fn new(client: Arc<ApiClient>, actor: Option<UserRole>) -> Self {
        Self { client, actor }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<CropSeason>, ClientError> {
        authorize(self.actor, perm::CROP_SEASONS_READ)?;
        self.client.get(SEASONS_PATH).await
    }

    /// Season with its details
    #[instrument(skip(self))]
    pub async fn get(&self, crop_season_id: Uuid) -> Result<CropSeason, ClientError> {
        authorize(self.actor, perm::CROP_SEASONS_READ)?;
        self.client
            .get(&format!("{}/{}", SEASONS_PATH, crop_season_id))
            .await
    }

    #[instrument(skip(self, form))]
    pub async fn create(&self, form: &CropSeasonForm) -> Result<CropSeason, ClientError> {
        authorize(self.actor, perm::CROP_SEASONS_WRITE)?;
        check(form)?;
        let season: CropSeason = self.client.post(SEASONS_PATH, form).await?;
        info!(crop_season_id = %season.crop_season_id, "crop season created");
        Ok(season)
    }

    #[instrument(skip(self, form))]
    pub async fn update(
        &self,
        crop_season_id: Uuid,
        form: &CropSeasonForm,
    ) -> Result<CropSeason, ClientError> {
        authorize(self.actor, perm::CROP_SEASONS_WRITE)?;
        check(form)?;
        self.client
            .put(&format!("{}/{}", SEASONS_PATH, crop_season_id), form)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, crop_season_id: Uuid) -> Result<(), ClientError> {
        authorize(self.actor, perm::CROP_SEASONS_WRITE)?;
        self.client
            .delete(&format!("{}/{}", SEASONS_PATH, crop_season_id))
            .await
    }

    /// Adds a coffee variety planted in the season.
    #[instrument(skip(self, form))]
    pub async fn add_detail(
        &self,
        crop_season_id: Uuid,
        form: &CropSeasonDetailForm,
    ) -> Result<CropSeasonDetail, ClientError> {
        authorize(self.actor, perm::CROP_SEASONS_WRITE)?;
        check(form)?;
        let body = DetailPayload {
            crop_season_id,
            form,
        };
        self.client.post(DETAILS_PATH, &body).await
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailPayload<'a> {
    crop_season_id: Uuid,
    #[serde(flatten)]
    form: &'a CropSeasonDetailForm,
}
