use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::{Map, Value};

/// Matches a serialized `"click":"<expression>"` pair. The capture honours
/// JSON escapes so an escaped quote inside the expression does not end it.
static CLICK_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""click":"((?:[^"\\]|\\.)*)""#).expect("click action pattern is valid")
});

/// Removes `null` values and containers that are empty once their children
/// were pruned. Non-container leaves pass through unchanged.
///
/// Returns `None` when nothing survives.
#[must_use]
pub fn prune_empty(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => {
            let pruned: Map<String, Value> = map
                .into_iter()
                .filter_map(|(key, value)| prune_empty(value).map(|value| (key, value)))
                .collect();
            (!pruned.is_empty()).then_some(Value::Object(pruned))
        }
        Value::Array(items) => {
            let pruned: Vec<Value> = items.into_iter().filter_map(prune_empty).collect();
            (!pruned.is_empty()).then_some(Value::Array(pruned))
        }
        leaf => Some(leaf),
    }
}

/// Strips the quotes around serialized click actions so the browser receives
/// the handler expression itself instead of a string literal.
///
/// Operates on the final JSON text; any object key named `click` with a
/// non-blank string value is affected.
#[must_use]
pub fn unquote_click_actions(json: &str) -> Cow<'_, str> {
    CLICK_ACTION.replace_all(json, |caps: &Captures<'_>| {
        let escaped = &caps[1];
        let expression = serde_json::from_str::<String>(&format!("\"{escaped}\""))
            .unwrap_or_else(|_| escaped.to_owned());
        if expression.trim().is_empty() {
            // Nothing to run; an empty string keeps the document valid.
            return caps[0].to_owned();
        }
        format!("\"click\":{expression}")
    })
}
