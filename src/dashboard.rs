/*!
 * # Role dashboards
 *
 * Maps each user role to the dashboard sections it sees and the actions it
 * may start. The table is advisory: it hides what a role cannot do, while the
 * backend still authorizes every request.
 */

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

use crate::models::UserRole;

/// Permission names, `resource:action`; `resource:*` grants every action.
pub mod perm {
    pub const CROP_SEASONS_READ: &str = "crop-seasons:read";
    pub const CROP_SEASONS_WRITE: &str = "crop-seasons:write";
    pub const CROP_PROGRESS_READ: &str = "crop-progress:read";
    pub const CROP_PROGRESS_WRITE: &str = "crop-progress:write";
    pub const REPORTS_READ: &str = "reports:read";
    pub const REPORTS_WRITE: &str = "reports:write";
    pub const REPORTS_ADVISE: &str = "reports:advise";
    pub const BATCHES_READ: &str = "batches:read";
    pub const BATCHES_WRITE: &str = "batches:write";
    pub const INBOUND_READ: &str = "inbound:read";
    pub const INBOUND_CREATE: &str = "inbound:create";
    pub const INBOUND_CANCEL: &str = "inbound:cancel";
    pub const INBOUND_REVIEW: &str = "inbound:review";
    pub const ORDERS_READ: &str = "orders:read";
    pub const SHIPMENTS_READ: &str = "shipments:read";
    pub const SHIPMENTS_CREATE: &str = "shipments:create";
    pub const SHIPMENTS_UPDATE_STATUS: &str = "shipments:update-status";
    pub const SHIPMENTS_DELETE: &str = "shipments:delete";
    pub const PROFILE_WRITE: &str = "profile:write";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum Section {
    CropSeasons,
    CropProgress,
    FarmerReports,
    ExpertAdvice,
    ProcessingBatches,
    WarehouseInbound,
    Orders,
    Shipments,
    Users,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub role: UserRole,
    pub sections: Vec<Section>,
    pub permissions: Vec<&'static str>,
}

lazy_static! {
    static ref DASHBOARDS: HashMap<UserRole, Dashboard> = {
        use perm::*;
        let mut dashboards = HashMap::new();

        dashboards.insert(
            UserRole::Admin,
            Dashboard {
                role: UserRole::Admin,
                sections: vec![Section::Users, Section::Orders, Section::Shipments],
                permissions: vec!["*"],
            },
        );

        dashboards.insert(
            UserRole::BusinessManager,
            Dashboard {
                role: UserRole::BusinessManager,
                sections: vec![
                    Section::Orders,
                    Section::Shipments,
                    Section::WarehouseInbound,
                    Section::ProcessingBatches,
                    Section::CropSeasons,
                ],
                permissions: vec![
                    ORDERS_READ,
                    "shipments:*",
                    INBOUND_READ,
                    INBOUND_REVIEW,
                    BATCHES_READ,
                    CROP_SEASONS_READ,
                    CROP_PROGRESS_READ,
                    REPORTS_READ,
                    PROFILE_WRITE,
                ],
            },
        );

        dashboards.insert(
            UserRole::BusinessStaff,
            Dashboard {
                role: UserRole::BusinessStaff,
                sections: vec![Section::WarehouseInbound, Section::Shipments, Section::Orders],
                permissions: vec![
                    ORDERS_READ,
                    SHIPMENTS_READ,
                    SHIPMENTS_CREATE,
                    SHIPMENTS_UPDATE_STATUS,
                    INBOUND_READ,
                    INBOUND_REVIEW,
                    BATCHES_READ,
                ],
            },
        );

        dashboards.insert(
            UserRole::Farmer,
            Dashboard {
                role: UserRole::Farmer,
                sections: vec![
                    Section::CropSeasons,
                    Section::CropProgress,
                    Section::FarmerReports,
                    Section::ProcessingBatches,
                    Section::WarehouseInbound,
                ],
                permissions: vec![
                    "crop-seasons:*",
                    "crop-progress:*",
                    REPORTS_READ,
                    REPORTS_WRITE,
                    "batches:*",
                    INBOUND_READ,
                    INBOUND_CREATE,
                    INBOUND_CANCEL,
                ],
            },
        );

        dashboards.insert(
            UserRole::AgriculturalExpert,
            Dashboard {
                role: UserRole::AgriculturalExpert,
                sections: vec![Section::FarmerReports, Section::ExpertAdvice],
                permissions: vec![REPORTS_READ, REPORTS_ADVISE, CROP_PROGRESS_READ],
            },
        );

        dashboards.insert(
            UserRole::DeliveryStaff,
            Dashboard {
                role: UserRole::DeliveryStaff,
                sections: vec![Section::Shipments],
                permissions: vec![SHIPMENTS_READ, SHIPMENTS_UPDATE_STATUS],
            },
        );

        dashboards
    };
}

/// Whether a granted permission covers the required one.
pub fn check_permission(granted: &str, required: &str) -> bool {
    if granted == "*" || granted == required {
        return true;
    }
    match granted.strip_suffix(":*") {
        Some(resource) => required
            .split_once(':')
            .map_or(false, |(required_resource, _)| required_resource == resource),
        None => false,
    }
}

impl UserRole {
    /// Dashboard for this role; unknown roles have none.
    pub fn dashboard(self) -> Option<&'static Dashboard> {
        let dashboard = DASHBOARDS.get(&self);
        if dashboard.is_none() {
            warn!("No dashboard configured for role: {}", self);
        }
        dashboard
    }

    pub fn can(self, required: &str) -> bool {
        self.dashboard().map_or(false, |d| {
            d.permissions
                .iter()
                .any(|granted| check_permission(granted, required))
        })
    }

    pub fn sections(self) -> &'static [Section] {
        self.dashboard().map_or(&[], |d| d.sections.as_slice())
    }
}
