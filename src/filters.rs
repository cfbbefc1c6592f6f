//! Filtering applied to lists that were already fetched.

use chrono::NaiveDateTime;

use crate::models::{
    CropSeason, CropSeasonStatus, DeliveryStatus, InboundRequestStatus, Shipment,
    WarehouseInboundRequest,
};

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn normalized(search: &Option<String>) -> Option<String> {
    search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

#[derive(Debug, Clone, Default)]
pub struct ShipmentFilter {
    pub status: Option<DeliveryStatus>,
    /// Matched against shipment code and order code, ignoring case.
    pub search: Option<String>,
}

impl ShipmentFilter {
    pub fn matches(&self, shipment: &Shipment) -> bool {
        if let Some(status) = self.status {
            if shipment.delivery_status != status {
                return false;
            }
        }
        match normalized(&self.search) {
            Some(needle) => {
                contains_ci(&shipment.shipment_code, &needle)
                    || contains_ci(&shipment.order_code, &needle)
            }
            None => true,
        }
    }

    pub fn apply<'a>(&self, shipments: &'a [Shipment]) -> Vec<&'a Shipment> {
        shipments.iter().filter(|s| self.matches(s)).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InboundRequestFilter {
    pub status: Option<InboundRequestStatus>,
}

impl InboundRequestFilter {
    pub fn apply<'a>(
        &self,
        requests: &'a [WarehouseInboundRequest],
    ) -> Vec<&'a WarehouseInboundRequest> {
        requests
            .iter()
            .filter(|r| self.status.map_or(true, |status| r.status == status))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CropSeasonFilter {
    pub status: Option<CropSeasonStatus>,
    /// Matched against season name and code, ignoring case.
    pub search: Option<String>,
}

impl CropSeasonFilter {
    pub fn apply<'a>(&self, seasons: &'a [CropSeason]) -> Vec<&'a CropSeason> {
        let needle = normalized(&self.search);
        seasons
            .iter()
            .filter(|season| self.status.map_or(true, |status| season.status == status))
            .filter(|season| match &needle {
                Some(needle) => {
                    contains_ci(&season.season_name, needle)
                        || season
                            .season_code
                            .as_deref()
                            .map_or(false, |code| contains_ci(code, needle))
                }
                None => true,
            })
            .collect()
    }
}

/// Sorts by `key` descending; records without a timestamp go last.
pub fn newest_first<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> Option<NaiveDateTime>,
{
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}
