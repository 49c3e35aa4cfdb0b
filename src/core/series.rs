use serde::{Deserialize, Serialize};

use super::{ChartType, DataPoint};

/// Series vocabulary of the client-side charting library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Column,
    Bar,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stacking {
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisId {
    X,
    Y,
}

/// Change to the chart-wide options requested by a series at construction.
///
/// Series never touch the global configuration themselves; the owner applies
/// the delta explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsDelta {
    EnableStackLabels(AxisId),
}

/// One plotted series with its own options and points.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    chart_type: ChartType,
    order: usize,
    kind: SeriesKind,
    stacking: Option<Stacking>,
    show_values: Option<bool>,
    label: Option<String>,
    points: Vec<DataPoint>,
}

impl SeriesData {
    /// Maps `chart_type` to its series kind and stacking attributes.
    ///
    /// `order` is the insertion index used to keep same-type series in the
    /// order they were added. The returned delta, when present, must be applied
    /// to the chart-wide options by the caller.
    #[must_use]
    pub fn new(chart_type: ChartType, order: usize) -> (Self, Option<OptionsDelta>) {
        let (kind, stacking, show_values, delta) = match chart_type {
            ChartType::Line => (SeriesKind::Line, None, None, None),
            ChartType::Bar => (SeriesKind::Column, None, None, None),
            ChartType::BarHorizontal => (SeriesKind::Bar, None, None, None),
            ChartType::StackedBar => (
                SeriesKind::Column,
                Some(Stacking::Normal),
                Some(true),
                Some(OptionsDelta::EnableStackLabels(AxisId::Y)),
            ),
            ChartType::StackedBarHorizontal => (
                SeriesKind::Bar,
                Some(Stacking::Normal),
                Some(true),
                Some(OptionsDelta::EnableStackLabels(AxisId::X)),
            ),
            ChartType::Pie => (SeriesKind::Pie, None, None, None),
        };

        let series = Self {
            chart_type,
            order,
            kind,
            stacking,
            show_values,
            label: None,
            points: vec![DataPoint::zero()],
        };
        (series, delta)
    }

    /// Replaces the points. An empty input leaves a single zero point.
    pub fn set_points<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<DataPoint>,
    {
        self.points = values.into_iter().map(Into::into).collect();
        if self.points.is_empty() {
            self.points.push(DataPoint::zero());
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    pub fn set_show_values(&mut self, show_values: bool) {
        self.show_values = Some(show_values);
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    #[must_use]
    pub fn stacking(&self) -> Option<Stacking> {
        self.stacking
    }

    #[must_use]
    pub fn show_values(&self) -> Option<bool> {
        self.show_values
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Sort key for output: type precedence first, then insertion order.
    #[must_use]
    pub fn draw_key(&self) -> (u8, usize) {
        (self.chart_type.precedence(), self.order)
    }
}
