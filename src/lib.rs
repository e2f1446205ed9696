//! dashchart: chart geometry engine for analytics dashboards.
//!
//! Turns labelled numeric series into a backend-agnostic drawable tree for
//! line, bar and pie/donut charts, and resolves pointer hover against the
//! geometry it produced.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartKind, ChartOptions};
pub use core::{ChartData, Dataset};
pub use error::{ChartError, ChartResult};
