use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// Opaque client-side handler expression attached to a point or to a whole
/// plot.
///
/// The expression is embedded verbatim (unquoted) into the emitted options, so
/// it is executed by the browser rather than read as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionRef(String);

impl ActionRef {
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A blank expression has nothing to run and is never emitted.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for ActionRef {
    fn from(expression: &str) -> Self {
        Self::new(expression)
    }
}

impl From<String> for ActionRef {
    fn from(expression: String) -> Self {
        Self(expression)
    }
}

/// One value within a series.
///
/// Values are always finite: anything that is not a number (or a string that
/// parses as one) is stored as `0.0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataPoint {
    value: f64,
    action: Option<ActionRef>,
    name: Option<String>,
}

impl DataPoint {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value: finite_or_zero(value),
            action: None,
            name: None,
        }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_action(mut self, action: impl Into<ActionRef>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the display name used by pie slices when no positional label is
    /// available.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn action(&self) -> Option<&ActionRef> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        trace!(value, "coercing non-finite value to zero");
        0.0
    }
}

fn parse_or_zero(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) => finite_or_zero(value),
        Err(_) => {
            trace!(text, "coercing non-numeric value to zero");
            0.0
        }
    }
}

impl From<f64> for DataPoint {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<f32> for DataPoint {
    fn from(value: f32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<i32> for DataPoint {
    fn from(value: i32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<u32> for DataPoint {
    fn from(value: u32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<i64> for DataPoint {
    fn from(value: i64) -> Self {
        Self::new(value as f64)
    }
}

impl From<u64> for DataPoint {
    fn from(value: u64) -> Self {
        Self::new(value as f64)
    }
}

impl From<usize> for DataPoint {
    fn from(value: usize) -> Self {
        Self::new(value as f64)
    }
}

impl From<Option<f64>> for DataPoint {
    fn from(value: Option<f64>) -> Self {
        Self::new(value.unwrap_or(0.0))
    }
}

impl From<&str> for DataPoint {
    fn from(value: &str) -> Self {
        Self::new(parse_or_zero(value))
    }
}

impl From<String> for DataPoint {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&Value> for DataPoint {
    fn from(value: &Value) -> Self {
        let value = match value {
            Value::Number(number) => number.as_f64().unwrap_or(0.0),
            Value::String(text) => parse_or_zero(text),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                trace!(%value, "coercing non-numeric json value to zero");
                0.0
            }
        };
        Self::new(value)
    }
}

impl From<Value> for DataPoint {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl<V: Into<DataPoint>> From<(V, ActionRef)> for DataPoint {
    fn from((value, action): (V, ActionRef)) -> Self {
        value.into().with_action(action)
    }
}
