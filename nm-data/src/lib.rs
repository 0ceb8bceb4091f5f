//! Page data model for the news monitor dashboard.
//!
//! The server renders four data objects into every dashboard page. This crate
//! gives them types, a single deserialization entry point and a defined
//! contract for missing data: absent means empty, never undefined.
//!
//! - `trend`: daily news counts for the line chart
//! - `sentiment`: positive/neutral/negative totals for the donut chart
//! - `labeled`: parallel label/value series for the platform and interaction charts
//! - `page`: the bundle of all four as it arrives from the page
//! - `entity`: keyword and platform row ids
//! - `count`: lenient reading of the counts the page writes

pub mod count;
pub mod entity;
pub mod labeled;
pub mod page;
pub mod sentiment;
pub mod trend;

pub use entity::{EntityId, EntityKind};
pub use labeled::{InteractionMetrics, LabeledValues, PlatformDistribution};
pub use page::{DashboardData, SkippedMember};
pub use sentiment::SentimentCounts;
pub use trend::{TrendPoint, TrendSeries};
