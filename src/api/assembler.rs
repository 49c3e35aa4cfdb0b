use tracing::{trace, warn};

use crate::core::{ChartType, SeriesData, SeriesKind};
use crate::error::{ChartError, ChartResult};

use super::json_cleanup::{prune_empty, unquote_click_actions};
use super::options::{
    AxisLabels, AxisSection, ChartOptions, ChartSection, Events, LegendSection, OptionalToggle,
    PlotOptionsSection, PlotSeriesOptions, PointEntry, SeriesEntry, TextStyle, TitleSection,
    Toggle, TooltipSection,
};
use super::{AxisConfig, ChartConfig};

/// Turns a chart configuration and its series into the serialized option
/// document.
///
/// The assembler only borrows its inputs; assembling twice yields identical
/// output.
#[derive(Debug, Clone, Copy)]
pub struct OptionsAssembler<'a> {
    config: &'a ChartConfig,
    series: &'a [SeriesData],
}

impl<'a> OptionsAssembler<'a> {
    #[must_use]
    pub fn new(config: &'a ChartConfig, series: &'a [SeriesData]) -> Self {
        Self { config, series }
    }

    /// Series in output order: type precedence first, insertion order second.
    #[must_use]
    pub fn sorted_series(&self) -> Vec<&'a SeriesData> {
        let mut sorted: Vec<&SeriesData> = self.series.iter().collect();
        sorted.sort_by_key(|series| series.draw_key());
        trace!(
            order = ?sorted.iter().map(|s| s.order()).collect::<Vec<_>>(),
            "sorted series for output"
        );
        sorted
    }

    /// Builds the typed option tree.
    #[must_use]
    pub fn build(&self) -> ChartOptions {
        let config = self.config;
        let font_color = config.font_color.as_deref();

        ChartOptions {
            credits: Toggle { enabled: false },
            tooltip: TooltipSection {
                follow_pointer: true,
            },
            colors: config.series_colors.clone(),
            chart: ChartSection {
                background_color: config.background_color.clone(),
                height: config.height,
                width: config.width,
                style: TextStyle {
                    font_family: Some(config.font_family.clone()),
                    color: font_color.map(str::to_owned),
                },
            },
            legend: LegendSection {
                enabled: config.render_legend,
                item_style: TextStyle::colored(font_color),
            },
            title: TitleSection {
                text: config.title.clone(),
                style: TextStyle::colored(font_color),
            },
            x_axis: axis_section(&config.x_axis, font_color),
            y_axis: axis_section(&config.y_axis, font_color),
            plot_options: PlotOptionsSection {
                series: PlotSeriesOptions {
                    events: Events {
                        click: config.series_click_action.clone(),
                    },
                },
            },
            series: self
                .sorted_series()
                .into_iter()
                .map(|series| self.series_entry(series))
                .collect(),
            exporting: Toggle { enabled: false },
        }
    }

    /// Serializes the pruned option tree and unquotes click actions.
    pub fn to_json(&self) -> ChartResult<String> {
        let tree = serde_json::to_value(self.build())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options: {e}")))?;
        let text = match prune_empty(tree) {
            Some(pruned) => serde_json::to_string(&pruned).map_err(|e| {
                ChartError::InvalidData(format!("failed to serialize options: {e}"))
            })?,
            None => "{}".to_owned(),
        };
        Ok(unquote_click_actions(&text).into_owned())
    }

    fn series_entry(&self, series: &SeriesData) -> SeriesEntry {
        let horizontal = self.config.bar_horizontal
            && matches!(
                series.chart_type(),
                ChartType::Bar | ChartType::StackedBar
            );
        let kind = if horizontal {
            SeriesKind::Bar
        } else {
            series.kind()
        };

        SeriesEntry {
            kind,
            data: self.point_entries(series),
            name: series.label().map(str::to_owned),
            data_labels: OptionalToggle {
                enabled: series.show_values(),
            },
            stacking: series.stacking(),
        }
    }

    fn point_entries(&self, series: &SeriesData) -> Vec<PointEntry> {
        let is_pie = series.chart_type() == ChartType::Pie;
        let labels = if is_pie {
            self.config.x_axis.tick_labels.as_deref()
        } else {
            None
        };
        if let Some(labels) = labels {
            if labels.len() < series.points().len() {
                warn!(
                    labels = labels.len(),
                    points = series.points().len(),
                    "fewer pie labels than points; trailing slices stay unnamed"
                );
            }
        }

        series
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let name = if is_pie {
                    labels
                        .and_then(|labels| labels.get(index).cloned())
                        .or_else(|| point.name().map(str::to_owned))
                } else {
                    None
                };

                PointEntry {
                    events: Events {
                        click: point.action().cloned(),
                    },
                    y: point.value(),
                    name,
                }
            })
            .collect()
    }
}

fn axis_section(axis: &AxisConfig, font_color: Option<&str>) -> AxisSection {
    AxisSection {
        title: TitleSection {
            text: axis.title.clone(),
            style: TextStyle::colored(font_color),
        },
        categories: axis.tick_labels.clone(),
        labels: AxisLabels {
            rotation: axis.label_rotation,
            style: TextStyle::colored(font_color),
            enabled: axis.labels_enabled,
        },
        tick_amount: axis.written_labels,
        min_range: axis.range.map(|range| range.min),
        max_range: axis.range.map(|range| range.max),
        visible: axis.hidden.then_some(false),
        stack_labels: axis.stack_labels.then_some(Toggle { enabled: true }),
    }
}
