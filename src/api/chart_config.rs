use serde::{Deserialize, Serialize};

use crate::core::{ActionRef, AxisId, OptionsDelta};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_WIDTH: u32 = 700;
pub const DEFAULT_HEIGHT: u32 = 350;
pub const DEFAULT_WRITTEN_LABELS: u32 = 12;
pub const DEFAULT_FONT_FAMILY: &str = "'Open Sans', Helvetica, Arial, sans-serif";
pub const DEFAULT_SERIES_COLORS: [&str; 9] = [
    "#8bbc21", "#2f7ed8", "#f28f43", "#1aadce", "#77a1e5", "#0d233a", "#c42525", "#a6c96a",
    "#910000",
];

/// Inclusive value range requested for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Per-axis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub title: String,
    pub tick_labels: Option<Vec<String>>,
    pub written_labels: Option<u32>,
    pub label_rotation: Option<i32>,
    pub range: Option<AxisRange>,
    pub labels_enabled: bool,
    pub hidden: bool,
    pub stack_labels: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tick_labels: None,
            written_labels: None,
            label_rotation: None,
            range: None,
            labels_enabled: true,
            hidden: false,
            stack_labels: false,
        }
    }
}

impl AxisConfig {
    fn validate(&self, axis: &str) -> ChartResult<()> {
        if self.written_labels == Some(0) {
            return Err(ChartError::InvalidData(format!(
                "{axis}-axis written label count must be > 0"
            )));
        }
        if let Some(range) = self.range {
            validate_range(axis, range.min, range.max)?;
        }
        Ok(())
    }
}

/// Chart-wide settings owned by one builder.
///
/// This type is serializable so host applications can keep chart presets in
/// their own configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub title: String,
    pub background_color: Option<String>,
    pub font_family: String,
    pub font_color: Option<String>,
    pub series_colors: Vec<String>,
    pub render_legend: Option<bool>,
    pub bar_horizontal: bool,
    pub series_click_action: Option<ActionRef>,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            title: String::new(),
            background_color: None,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            font_color: None,
            series_colors: DEFAULT_SERIES_COLORS.map(str::to_owned).to_vec(),
            render_legend: None,
            bar_horizontal: false,
            series_click_action: None,
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets explicit chart dimensions in pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_font(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    #[must_use]
    pub fn with_font_color(mut self, color: impl Into<String>) -> Self {
        self.font_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_series_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.series_colors = colors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_legend(mut self, render_legend: bool) -> Self {
        self.render_legend = Some(render_legend);
        self
    }

    #[must_use]
    pub fn with_bar_horizontal(mut self, bar_horizontal: bool) -> Self {
        self.bar_horizontal = bar_horizontal;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisConfig) -> Self {
        self.x_axis = axis;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisConfig) -> Self {
        self.y_axis = axis;
        self
    }

    /// Container width; falls back to [`DEFAULT_WIDTH`].
    #[must_use]
    pub fn container_width(&self) -> u32 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    /// Container height; falls back to [`DEFAULT_HEIGHT`].
    #[must_use]
    pub fn container_height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn axis_mut(&mut self, axis: AxisId) -> &mut AxisConfig {
        match axis {
            AxisId::X => &mut self.x_axis,
            AxisId::Y => &mut self.y_axis,
        }
    }

    pub fn apply_delta(&mut self, delta: OptionsDelta) {
        match delta {
            OptionsDelta::EnableStackLabels(axis) => self.axis_mut(axis).stack_labels = true,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == Some(0) {
                return Err(ChartError::InvalidData(format!("chart {name} must be > 0")));
            }
        }
        self.x_axis.validate("x")?;
        self.y_axis.validate("y")
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

pub(super) fn validate_range(axis: &str, min: f64, max: f64) -> ChartResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{axis}-axis range bounds must be finite"
        )));
    }
    if min > max {
        return Err(ChartError::InvalidData(format!(
            "{axis}-axis range min must be <= max"
        )));
    }
    Ok(())
}
