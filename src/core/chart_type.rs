use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed set of series types a chart can hold.
///
/// Each variant keeps the bit-flag code it was historically exchanged with
/// (see [`ChartType::code`]), so persisted or host-supplied codes can be mapped
/// back through [`ChartType::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Bar,
    StackedBar,
    StackedBarHorizontal,
    BarHorizontal,
    Line,
    Pie,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Bar,
        ChartType::StackedBar,
        ChartType::StackedBarHorizontal,
        ChartType::BarHorizontal,
        ChartType::Line,
        ChartType::Pie,
    ];

    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            ChartType::Bar => 1,
            ChartType::StackedBar => 2,
            ChartType::Line => 4,
            ChartType::Pie => 8,
            ChartType::StackedBarHorizontal => 16,
            ChartType::BarHorizontal => 32,
        }
    }

    pub fn from_code(code: u32) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|chart_type| chart_type.code() == code)
            .ok_or(ChartError::InvalidChartType(code))
    }

    /// Draw precedence used when ordering series for output.
    ///
    /// Bar-family series come first so lines are painted on top of them; pie
    /// is last.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            ChartType::Bar => 0,
            ChartType::StackedBar => 1,
            ChartType::StackedBarHorizontal => 2,
            ChartType::BarHorizontal => 3,
            ChartType::Line => 4,
            ChartType::Pie => 5,
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartType::Bar => "bar",
            ChartType::StackedBar => "stacked bar",
            ChartType::StackedBarHorizontal => "horizontal stacked bar",
            ChartType::BarHorizontal => "horizontal bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
        };
        f.write_str(name)
    }
}
