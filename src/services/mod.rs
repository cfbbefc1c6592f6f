//! Resource services over [`ApiClient`].
//!
//! Every mutation validates its form before any request is sent. When a
//! service knows the signed-in user's role it also checks the dashboard
//! permission table first; the backend still has the final say.

pub mod auth;
pub mod crop_progress;
pub mod crop_seasons;
pub mod farmer_reports;
pub mod orders;
pub mod processing_batches;
pub mod profile;
pub mod shipments;
pub mod warehouse_requests;

use std::sync::Arc;
use tracing::warn;

use crate::client::ApiClient;
use crate::errors::ClientError;
use crate::models::UserRole;

pub use auth::AuthService;
pub use crop_progress::CropProgressService;
pub use crop_seasons::CropSeasonService;
pub use farmer_reports::FarmerReportService;
pub use orders::OrderService;
pub use processing_batches::ProcessingBatchService;
pub use profile::ProfileService;
pub use shipments::ShipmentService;
pub use warehouse_requests::WarehouseRequestService;

/// Advisory permission gate; passes when no actor role is known.
pub(crate) fn authorize(actor: Option<UserRole>, permission: &str) -> Result<(), ClientError> {
    match actor {
        Some(role) if !role.can(permission) => {
            warn!(%role, permission, "action not permitted for role");
            Err(ClientError::Forbidden(format!(
                "{} may not perform {}",
                role, permission
            )))
        }
        _ => Ok(()),
    }
}

/// Service container holding all service instances
#[derive(Clone)]
pub struct ServiceContainer {
    pub auth: Arc<AuthService>,
    pub shipments: Arc<ShipmentService>,
    pub crop_seasons: Arc<CropSeasonService>,
    pub crop_progress: Arc<CropProgressService>,
    pub farmer_reports: Arc<FarmerReportService>,
    pub processing_batches: Arc<ProcessingBatchService>,
    pub warehouse_requests: Arc<WarehouseRequestService>,
    pub orders: Arc<OrderService>,
    pub profile: Arc<ProfileService>,
}

impl ServiceContainer {
    /// Builds every service over one shared client.
    pub fn new(client: Arc<ApiClient>, actor: Option<UserRole>) -> Self {
        Self {
            auth: Arc::new(AuthService::new(client.clone())),
            shipments: Arc::new(ShipmentService::new(client.clone(), actor)),
            crop_seasons: Arc::new(CropSeasonService::new(client.clone(), actor)),
            crop_progress: Arc::new(CropProgressService::new(client.clone(), actor)),
            farmer_reports: Arc::new(FarmerReportService::new(client.clone(), actor)),
            processing_batches: Arc::new(ProcessingBatchService::new(client.clone(), actor)),
            warehouse_requests: Arc::new(WarehouseRequestService::new(client.clone(), actor)),
            orders: Arc::new(OrderService::new(client.clone())),
            profile: Arc::new(ProfileService::new(client, actor)),
        }
    }
}
