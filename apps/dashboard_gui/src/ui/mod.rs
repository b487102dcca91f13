//! UI layer for the dashboard: app shell and widgets.

pub mod app;
pub mod widgets;

pub use app::DashboardApp;
