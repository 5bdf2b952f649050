//! Host-facing entry points: configuration and the dashboard facade.

mod config;
mod dashboard;

pub use config::DashboardConfig;
pub use dashboard::Dashboard;
