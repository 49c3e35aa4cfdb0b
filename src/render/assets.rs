/// Client-side runtime that defines `chartEmbed.loader` and
/// `chartEmbed.ChartWrapper`.
///
/// Hosts either include it once per page or let [`super::HtmlEmitter`] inline
/// it in front of each snippet.
pub const CHART_WRAPPER_JS: &str = include_str!("assets/chart-wrapper.js");

/// Resolves the script URLs the emitted snippet loads.
///
/// Path resolution belongs to the host application; implement this trait to
/// plug in its static-asset lookup.
pub trait AssetResolver {
    /// The charting library itself, loaded first.
    fn library_script(&self) -> String;

    /// Scripts loaded once the library is available.
    fn plugin_scripts(&self) -> Vec<String>;
}

/// Resolves every asset below one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAssets {
    base_url: String,
}

impl StaticAssets {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl Default for StaticAssets {
    fn default() -> Self {
        Self::new("/scripts")
    }
}

impl AssetResolver for StaticAssets {
    fn library_script(&self) -> String {
        format!("{}/highcharts/highcharts.js", self.base_url)
    }

    fn plugin_scripts(&self) -> Vec<String> {
        vec![format!("{}/highcharts/modules/exporting.js", self.base_url)]
    }
}
