use thiserror::Error;

use crate::core::ChartType;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart already contains a {existing} series; {requested} cannot be combined with it")]
    IncompatibleChartTypes {
        existing: ChartType,
        requested: ChartType,
    },

    #[error("not a valid chart type code: {0}")]
    InvalidChartType(u32),

    #[error("chart not initialized yet: add at least one series before rendering")]
    NotInitialized,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
