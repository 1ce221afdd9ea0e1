//! Core types, stats API client and dashboard view model for GamerWrapped.
//!
//! This crate provides:
//! - `models`: the `YearStats` payload served by `/api/stats`
//! - `chart`: the six static chart descriptors and layout orientation
//! - `client`: a `reqwest` client for the stats and chart-image endpoints
//! - `dashboard`: the view-model state machine (years, compare slot, view mode)
//! - `views`: read-only projections of the dashboard for a rendering layer

pub mod chart;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod views;
pub mod years;

pub use chart::{ChartId, ChartSpec, Metric, Orientation, StatsField, CHART_SPECS, COMPARE_COLOR};
pub use client::{chart_image_url, StatsClient};
pub use config::Config;
pub use dashboard::{Applied, Dashboard, Event, FetchTicket, Slot, SlotState, ViewMode};
pub use error::{GwError, Result};
pub use models::{GameEntry, PlaytimeEntry, YearStats};
pub use views::{Bar, ChartPair, ChartView, DashboardView, ExportChart};
pub use years::YearRange;
