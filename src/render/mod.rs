//! HTML embedding of serialized chart options.
//!
//! The emitted snippet is a sized container plus a script that waits for the
//! charting library, then hands the options to a client-side wrapper.

mod assets;
mod html;
mod id;

pub use assets::{AssetResolver, CHART_WRAPPER_JS, StaticAssets};
pub use html::HtmlEmitter;
pub use id::ContainerId;
