//! Client-side workflow checks.
//!
//! Both checks are advisory: the backend remains the authority and may still
//! reject a request these functions allowed.

pub mod crop_stages;
pub mod delivery_status;

pub use crop_stages::{
    is_harvesting, next_stage, next_stage_for_detail, ordered_stages, NextStage, StageError,
    DEFAULT_STAGE_CODES, HARVESTING_CODE,
};
pub use delivery_status::{can_transition, can_transition_str, DeliveryStatus};
