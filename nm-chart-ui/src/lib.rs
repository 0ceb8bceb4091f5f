//! Browser side of the news monitor dashboard.
//!
//! This crate provides:
//! - `chart_config`: Chart.js configs for the trend, sentiment, platform and interaction charts
//! - `actions`: keyword/platform management and crawl handlers with their validation rules
//! - `dashboard`: the page-ready sequence (tooltips, charts, date range stub)
//! - `services`: the capabilities all of the above run against
//! - `dom` / `js_bridge`: `web_sys` and Chart.js/Bootstrap implementations of those capabilities
//! - `console_log`: a `log` backend for the devtools console

pub mod actions;
pub mod chart_config;
pub mod config;
pub mod console_log;
pub mod dashboard;
pub mod dom;
pub mod js_bridge;
pub mod palette;
pub mod registry;
pub mod services;

pub use actions::{ActionError, ActionOutcome, DashboardActions, ValidationError};
pub use chart_config::{ChartConfig, ChartId};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, InitReport};
