//! chart-embed: typed option documents and HTML embedding for client-side
//! Highcharts-style charts.
//!
//! A [`ChartBuilder`] collects series (bar, stacked bar, horizontal bar, line,
//! pie), rejects combinations the chart library cannot draw together, and
//! renders a container element plus an initialization script that hands the
//! serialized options to the browser.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartBuilder, ChartConfig};
pub use error::{ChartError, ChartResult};
