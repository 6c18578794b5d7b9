//! HTTP client, stores and derived views for the clinic admin front-end.
//!
//! Nothing here depends on the UI framework; the `app` crate wraps the
//! stores in signals and drives the async operations.

pub mod analytics;
pub mod api;
pub mod config;
pub mod filters;
pub mod session;
pub mod store;
pub mod telemetry;
pub mod workflow;

pub use api::ApiClient;
pub use session::{resume, sign_in, Session};
pub use store::*;
pub use workflow::{request_transition, ScheduleApi};
