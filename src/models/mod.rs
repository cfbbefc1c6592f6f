//! View models returned by the backend.
//!
//! Records are read-only on the client; every mutation goes through a service
//! call and the backend's answer replaces the local copy.

pub mod crop;
pub mod order;
pub mod processing;
pub mod report;
pub mod shipment;
pub mod user;
pub mod warehouse;

pub use crop::{CropProgress, CropSeason, CropSeasonDetail, CropSeasonStatus, CropStage};
pub use order::{Order, OrderItem, OrderStatus};
pub use processing::{ProcessingBatch, ProcessingBatchStatus};
pub use report::{FarmerReport, ReportType, SeverityLevel};
pub use shipment::{DeliveryStatus, Shipment, ShipmentDetail};
pub use user::{BusinessProfile, LoginResponse, UserRole};
pub use warehouse::{InboundRequestStatus, WarehouseInboundRequest};
