//! Chart domain types: chart types, points, series and the rules for which
//! series may share a chart.

pub mod chart_type;
pub mod compatibility;
pub mod data_point;
pub mod series;

pub use chart_type::ChartType;
pub use compatibility::{check_compatibility, conflicts};
pub use data_point::{ActionRef, DataPoint};
pub use series::{AxisId, OptionsDelta, SeriesData, SeriesKind, Stacking};
