use tracing::debug;

use crate::core::{ActionRef, AxisId, ChartType, DataPoint, SeriesData, check_compatibility};
use crate::error::{ChartError, ChartResult};
use crate::render::{AssetResolver, HtmlEmitter, StaticAssets};

use super::chart_config::validate_range;
use super::{AxisRange, ChartConfig, DEFAULT_WRITTEN_LABELS, OptionsAssembler};

/// Accumulates series and chart-wide settings for a single chart.
///
/// Every `add_*` call validates the new series against all series already
/// present; a rejected series leaves the builder unchanged.
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    config: ChartConfig,
    series: Vec<SeriesData>,
}

impl ChartBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            series: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesData] {
        &self.series
    }

    #[must_use]
    pub fn contains_chart_type(&self, chart_type: ChartType) -> bool {
        self.series
            .iter()
            .any(|series| series.chart_type() == chart_type)
    }

    /// Adds a vertical bar series. Several calls produce a grouped bar chart.
    pub fn add_bar_series<I>(
        &mut self,
        values: I,
        label: impl Into<String>,
        show_values: bool,
    ) -> ChartResult<()>
    where
        I: IntoIterator,
        I::Item: Into<DataPoint>,
    {
        let series = self.push_series(ChartType::Bar, values)?;
        series.set_label(label);
        series.set_show_values(show_values);
        Ok(())
    }

    pub fn add_horizontal_bar_series<I>(
        &mut self,
        values: I,
        label: impl Into<String>,
        show_values: bool,
    ) -> ChartResult<()>
    where
        I: IntoIterator,
        I::Item: Into<DataPoint>,
    {
        let series = self.push_series(ChartType::BarHorizontal, values)?;
        series.set_label(label);
        series.set_show_values(show_values);
        Ok(())
    }

    /// Adds one layer of a stacked bar chart.
    pub fn add_stacked_bar_series<I>(
        &mut self,
        values: I,
        label: impl Into<String>,
        horizontal: bool,
    ) -> ChartResult<()>
    where
        I: IntoIterator,
        I::Item: Into<DataPoint>,
    {
        let chart_type = if horizontal {
            ChartType::StackedBarHorizontal
        } else {
            ChartType::StackedBar
        };
        self.push_series(chart_type, values)?.set_label(label);
        Ok(())
    }

    /// Adds a line. Lines may be drawn on top of plain bar series.
    pub fn add_line_plot<I>(&mut self, values: I, label: impl Into<String>) -> ChartResult<()>
    where
        I: IntoIterator,
        I::Item: Into<DataPoint>,
    {
        self.push_series(ChartType::Line, values)?.set_label(label);
        Ok(())
    }

    /// Makes this chart a pie chart. `labels` name the slices by position and
    /// double as x-axis tick labels.
    pub fn set_pie_chart<I, L, S>(&mut self, values: I, labels: L) -> ChartResult<()>
    where
        I: IntoIterator,
        I::Item: Into<DataPoint>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_series(ChartType::Pie, values)?;
        self.set_x_axis_tick_labels(labels, DEFAULT_WRITTEN_LABELS)
    }

    fn push_series<I>(&mut self, chart_type: ChartType, values: I) -> ChartResult<&mut SeriesData>
    where
        I: IntoIterator,
        I::Item: Into<DataPoint>,
    {
        check_compatibility(self.series.iter().map(SeriesData::chart_type), chart_type)?;

        let (mut series, delta) = SeriesData::new(chart_type, self.series.len());
        series.set_points(values);
        if let Some(delta) = delta {
            self.config.apply_delta(delta);
        }
        debug!(
            %chart_type,
            order = series.order(),
            points = series.points().len(),
            "added series"
        );

        self.series.push(series);
        let last = self.series.len() - 1;
        Ok(&mut self.series[last])
    }

    pub fn set_graph_title(&mut self, title: impl Into<String>) {
        self.config.title = title.into();
    }

    pub fn set_x_axis_title(&mut self, title: impl Into<String>) {
        self.config.x_axis.title = title.into();
    }

    pub fn set_y_axis_title(&mut self, title: impl Into<String>) {
        self.config.y_axis.title = title.into();
    }

    /// Color of the area around the plot, e.g. `#ccddee`.
    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.config.background_color = Some(color.into());
    }

    pub fn set_width(&mut self, width: u32) -> ChartResult<()> {
        if width == 0 {
            return Err(ChartError::InvalidData("chart width must be > 0".to_owned()));
        }
        self.config.width = Some(width);
        Ok(())
    }

    pub fn set_height(&mut self, height: u32) -> ChartResult<()> {
        if height == 0 {
            return Err(ChartError::InvalidData(
                "chart height must be > 0".to_owned(),
            ));
        }
        self.config.height = Some(height);
        Ok(())
    }

    /// Sets category labels for the x-axis and how many of them get written.
    pub fn set_x_axis_tick_labels<L, S>(&mut self, labels: L, written_labels: u32) -> ChartResult<()>
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if written_labels == 0 {
            return Err(ChartError::InvalidData(
                "x-axis written label count must be > 0".to_owned(),
            ));
        }
        self.config.x_axis.tick_labels = Some(labels.into_iter().map(Into::into).collect());
        self.config.x_axis.written_labels = Some(written_labels);
        Ok(())
    }

    pub fn set_render_legend(&mut self, render_legend: bool) {
        self.config.render_legend = Some(render_legend);
    }

    pub fn set_font(&mut self, font_family: impl Into<String>) {
        self.config.font_family = font_family.into();
    }

    /// Applies to chart text, title, axis labels, axis titles and legend items.
    pub fn set_font_color(&mut self, color: impl Into<String>) {
        self.config.font_color = Some(color.into());
    }

    pub fn set_x_axis_label_angle(&mut self, degrees: i32) {
        self.config.x_axis.label_rotation = Some(degrees);
    }

    pub fn set_series_colors<I, S>(&mut self, colors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.series_colors = colors.into_iter().map(Into::into).collect();
    }

    pub fn set_x_axis_range(&mut self, min: f64, max: f64) -> ChartResult<()> {
        self.set_axis_range(AxisId::X, min, max)
    }

    pub fn set_y_axis_range(&mut self, min: f64, max: f64) -> ChartResult<()> {
        self.set_axis_range(AxisId::Y, min, max)
    }

    fn set_axis_range(&mut self, axis: AxisId, min: f64, max: f64) -> ChartResult<()> {
        let name = match axis {
            AxisId::X => "x",
            AxisId::Y => "y",
        };
        validate_range(name, min, max)?;
        self.config.axis_mut(axis).range = Some(AxisRange { min, max });
        Ok(())
    }

    /// Draws plain and stacked bar series horizontally.
    pub fn set_bar_horizontal(&mut self, bar_horizontal: bool) {
        self.config.bar_horizontal = bar_horizontal;
    }

    pub fn set_hide_x_axis(&mut self, hide: bool) {
        self.config.x_axis.hidden = hide;
    }

    pub fn set_hide_y_axis(&mut self, hide: bool) {
        self.config.y_axis.hidden = hide;
    }

    /// Handler invoked when any point of any series is clicked.
    pub fn set_series_click_action(&mut self, action: impl Into<ActionRef>) {
        self.config.series_click_action = Some(action.into());
    }

    /// Serialized option document without the HTML wrapper.
    pub fn options_json(&self) -> ChartResult<String> {
        if self.series.is_empty() {
            return Err(ChartError::NotInitialized);
        }
        self.config.validate()?;
        OptionsAssembler::new(&self.config, &self.series).to_json()
    }

    /// Renders the chart snippet with assets resolved below `/scripts`.
    pub fn render(&self) -> ChartResult<String> {
        self.render_with(&StaticAssets::default())
    }

    pub fn render_with<A>(&self, assets: &A) -> ChartResult<String>
    where
        A: AssetResolver + ?Sized,
    {
        self.render_with_emitter(&self.html_emitter(), assets)
    }

    pub fn render_with_emitter<A>(&self, emitter: &HtmlEmitter, assets: &A) -> ChartResult<String>
    where
        A: AssetResolver + ?Sized,
    {
        let options = self.options_json()?;
        debug!(series = self.series.len(), "rendering chart");
        emitter.emit(&options, assets)
    }

    /// Emitter sized to this chart's container dimensions.
    #[must_use]
    pub fn html_emitter(&self) -> HtmlEmitter {
        HtmlEmitter::new(
            self.config.container_width(),
            self.config.container_height(),
        )
    }
}
