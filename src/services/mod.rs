//! Service clients.
//!
//! Each module holds the service metadata, a generated client, the request
//! and output types of its operations and a `model` module with the shapes
//! they share.

pub mod connect_cases;
pub mod finspace_data;
pub mod glacier;
pub mod iot_sitewise;
pub mod lookout_equipment;
pub mod lookout_metrics;
pub mod resilience_hub;
pub mod schemas;
pub mod ssm_incidents;
pub mod wafv2;
