use tracing::warn;

use super::ChartType;
use crate::error::{ChartError, ChartResult};

/// Returns `true` when a series of type `requested` cannot be added to a
/// chart that already holds a series of type `existing`.
///
/// The relation is directional: a horizontal stacked bar chart still accepts
/// later bar, line and pie series, while those types block a later horizontal
/// stacked bar. Plain horizontal bars conflict with nothing.
#[must_use]
pub fn conflicts(existing: ChartType, requested: ChartType) -> bool {
    use ChartType::{Bar, BarHorizontal, Line, Pie, StackedBar, StackedBarHorizontal};

    match requested {
        Bar => matches!(existing, Pie | StackedBar),
        StackedBar => matches!(existing, Pie | Line | Bar | StackedBarHorizontal),
        StackedBarHorizontal => matches!(existing, Pie | Line | Bar | StackedBar),
        Line => matches!(existing, Pie | StackedBar),
        Pie => matches!(existing, Pie | Line | Bar | StackedBar),
        BarHorizontal => false,
    }
}

/// Checks `requested` against every type already present in the chart.
pub fn check_compatibility<I>(existing: I, requested: ChartType) -> ChartResult<()>
where
    I: IntoIterator<Item = ChartType>,
{
    match existing
        .into_iter()
        .find(|&existing| conflicts(existing, requested))
    {
        Some(existing) => {
            warn!(%existing, %requested, "rejecting incompatible series");
            Err(ChartError::IncompatibleChartTypes {
                existing,
                requested,
            })
        }
        None => Ok(()),
    }
}
