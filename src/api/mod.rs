//! Public chart-building API: configuration, the series builder and the
//! option document it serializes to.

mod assembler;
mod builder;
mod chart_config;
mod json_cleanup;
pub mod options;

pub use assembler::OptionsAssembler;
pub use builder::ChartBuilder;
pub use chart_config::{
    AxisConfig, AxisRange, ChartConfig, DEFAULT_FONT_FAMILY, DEFAULT_HEIGHT,
    DEFAULT_SERIES_COLORS, DEFAULT_WIDTH, DEFAULT_WRITTEN_LABELS,
};
pub use json_cleanup::{prune_empty, unquote_click_actions};
pub use options::ChartOptions;
