use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::{AssetResolver, CHART_WRAPPER_JS, ContainerId};

const DEFAULT_LOADER_FUNCTION: &str = "chartEmbed.loader.loadFile";
const DEFAULT_WRAPPER_CONSTRUCTOR: &str = "chartEmbed.ChartWrapper";

/// Produces the container element and initialization script for one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlEmitter {
    width: u32,
    height: u32,
    loader_function: String,
    wrapper_constructor: String,
    inline_runtime: bool,
}

impl HtmlEmitter {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            loader_function: DEFAULT_LOADER_FUNCTION.to_owned(),
            wrapper_constructor: DEFAULT_WRAPPER_CONSTRUCTOR.to_owned(),
            inline_runtime: false,
        }
    }

    /// Name of the host function called as `loader(urls, callback)`.
    #[must_use]
    pub fn with_loader_function(mut self, name: impl Into<String>) -> Self {
        self.loader_function = name.into();
        self
    }

    /// Name of the constructor called as `new Wrapper(containerId, options)`.
    #[must_use]
    pub fn with_wrapper_constructor(mut self, name: impl Into<String>) -> Self {
        self.wrapper_constructor = name.into();
        self
    }

    /// Prepends [`CHART_WRAPPER_JS`] to the snippet.
    #[must_use]
    pub fn with_inline_runtime(mut self, inline_runtime: bool) -> Self {
        self.inline_runtime = inline_runtime;
        self
    }

    /// Emits the snippet under a freshly allocated container id.
    pub fn emit<A>(&self, options_json: &str, assets: &A) -> ChartResult<String>
    where
        A: AssetResolver + ?Sized,
    {
        self.emit_with_id(ContainerId::next(), options_json, assets)
    }

    pub fn emit_with_id<A>(
        &self,
        id: ContainerId,
        options_json: &str,
        assets: &A,
    ) -> ChartResult<String>
    where
        A: AssetResolver + ?Sized,
    {
        let library = url_list(&[assets.library_script()])?;
        let plugins = assets.plugin_scripts();
        let options = escape_script_text(options_json);

        let mut init = format!(
            "var {id}_wrapper = new {wrapper}('{id}', {options});\n{id}_wrapper.render();",
            wrapper = self.wrapper_constructor,
        );
        if !plugins.is_empty() {
            init = format!(
                "{loader}({urls}, function () {{\n{init}\n}});",
                loader = self.loader_function,
                urls = url_list(&plugins)?,
            );
        }

        let mut html = format!(
            r#"<div id="{id}" style="width:{width}px; height:{height}px;"></div>"#,
            width = self.width,
            height = self.height,
        );
        if self.inline_runtime {
            html.push_str(&format!(
                "<script type=\"text/javascript\">\n{}\n</script>",
                escape_script_text(CHART_WRAPPER_JS)
            ));
        }
        html.push_str(&format!(
            "<script type=\"text/javascript\">\n{loader}({library}, function () {{\n{init}\n}});\n</script>",
            loader = self.loader_function,
        ));

        debug!(%id, bytes = html.len(), "emitted chart snippet");
        Ok(html)
    }
}

fn url_list(urls: &[String]) -> ChartResult<String> {
    let json = serde_json::to_string(urls)
        .map_err(|e| ChartError::InvalidData(format!("failed to encode script urls: {e}")))?;
    Ok(escape_script_text(&json))
}

/// Keeps embedded text from closing the surrounding `<script>` element.
fn escape_script_text(text: &str) -> String {
    text.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::StaticAssets;

    #[test]
    fn container_is_sized_and_identified() {
        let html = HtmlEmitter::new(640, 480)
            .emit_with_id(ContainerId::from_raw(7), "{}", &StaticAssets::default())
            .expect("emit");
        assert!(html.starts_with(r#"<div id="chart_7" style="width:640px; height:480px;"></div>"#));
        assert!(html.contains("new chartEmbed.ChartWrapper('chart_7', {});"));
    }

    #[test]
    fn library_is_loaded_before_plugins() {
        let html = HtmlEmitter::new(10, 10)
            .emit_with_id(ContainerId::from_raw(1), "{}", &StaticAssets::new("/js"))
            .expect("emit");
        let library = html.find("/js/highcharts/highcharts.js").expect("library");
        let exporting = html
            .find("/js/highcharts/modules/exporting.js")
            .expect("exporting");
        assert!(library < exporting);
    }

    #[test]
    fn script_closing_tags_are_escaped() {
        let html = HtmlEmitter::new(10, 10)
            .emit_with_id(
                ContainerId::from_raw(2),
                r#"{"title":{"text":"</script>"}}"#,
                &StaticAssets::default(),
            )
            .expect("emit");
        assert_eq!(html.matches("</script>").count(), 1);
    }
}
