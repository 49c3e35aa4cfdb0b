//! Typed option document consumed by the client-side charting library.
//!
//! Field names follow the library's schema (`xAxis`, `plotOptions`,
//! `dataLabels`, ...). Unset fields are skipped while serializing; branches
//! that still end up empty are removed by [`super::prune_empty`].

use serde::Serialize;

use crate::core::{ActionRef, SeriesKind, Stacking};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub credits: Toggle,
    pub tooltip: TooltipSection,
    pub colors: Vec<String>,
    pub chart: ChartSection,
    pub legend: LegendSection,
    pub title: TitleSection,
    pub x_axis: AxisSection,
    pub y_axis: AxisSection,
    pub plot_options: PlotOptionsSection,
    pub series: Vec<SeriesEntry>,
    pub exporting: Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OptionalToggle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipSection {
    pub follow_pointer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TextStyle {
    #[must_use]
    pub fn colored(color: Option<&str>) -> Self {
        Self {
            font_family: None,
            color: color.map(str::to_owned),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub item_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TitleSection {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSection {
    pub title: TitleSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    pub labels: AxisLabels,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_range: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_range: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_labels: Option<Toggle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AxisLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,
    pub style: TextStyle,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlotOptionsSection {
    pub series: PlotSeriesOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlotSeriesOptions {
    pub events: Events,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Events {
    #[serde(skip_serializing_if = "no_action")]
    pub click: Option<ActionRef>,
}

fn no_action(action: &Option<ActionRef>) -> bool {
    action.as_ref().is_none_or(ActionRef::is_blank)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesEntry {
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub data: Vec<PointEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data_labels: OptionalToggle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacking: Option<Stacking>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointEntry {
    pub events: Events,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
