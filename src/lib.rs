//! Coffee Supply Client Library
//!
//! Typed access to the coffee supply-chain backend: crop seasons and their
//! growth stages, farmer reports, processing batches, warehouse inbound
//! requests, orders and shipments. The backend owns all state; this crate
//! validates forms, runs advisory workflow checks, formats values for display
//! and turns HTTP failures into messages a user can act on.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod client;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod errors;
pub mod filters;
pub mod forms;
pub mod models;
pub mod services;
pub mod workflow;

pub use client::{Anonymous, ApiClient, StaticToken, TokenProvider};
pub use config::{init_tracing, load_config, load_config_from, AppConfigError, ClientConfig};
pub use errors::{ClientError, ErrorResponse};
pub use services::ServiceContainer;
pub use workflow::{can_transition, next_stage, DeliveryStatus, NextStage, StageError};

/// Crate version, reported in the default user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
