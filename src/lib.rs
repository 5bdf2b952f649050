//! wind-dashboard: research dashboard for candidate wind farm locations.
//!
//! Two CSV tables are loaded once into [`data::DashboardData`] and injected
//! into a page dispatcher and three pure chart renderers. Chart payloads
//! project into backend-agnostic render frames drawn as SVG (or PNG with the
//! `cairo-backend` feature).

pub mod api;
pub mod charts;
pub mod core;
pub mod data;
pub mod error;
pub mod page;
pub mod render;
pub mod telemetry;

pub use api::{Dashboard, DashboardConfig};
pub use error::{DashboardError, DashboardResult};
