//! Prediction response parsing and the four-field result display.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Glyph shown in a result field with nothing to display.
pub const PLACEHOLDER: &str = "—";

/// Body of a successful `/predict` call.
///
/// Fields are optional; missing or mistyped values fall back to display
/// defaults instead of failing the parse.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PredictionResponse {
    #[serde(default, deserialize_with = "lenient_number")]
    pub probability: Option<f64>,
    #[serde(default)]
    pub prediction_default: Option<Value>,
    #[serde(default)]
    pub prediction_threshold: Option<Value>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub threshold: Option<f64>,
    #[serde(default, deserialize_with = "lenient_names")]
    pub used_features: Option<Vec<String>>,
}

/// Why a success body could not be turned into a [`PredictionResponse`].
#[derive(Debug, thiserror::Error)]
pub enum ResponseShapeError {
    #[error("body is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl PredictionResponse {
    /// Parse a success body. Anything but a JSON object is rejected.
    pub fn from_body(body: &str) -> Result<Self, ResponseShapeError> {
        let value: Value = serde_json::from_str(body.trim())?;
        if !value.is_object() {
            return Err(ResponseShapeError::NotAnObject(json_kind(&value)));
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64())
}

fn lenient_names<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}

/// Text currently shown in the `prob`, `pred-default`, `pred-thr` and `thr` fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultDisplay {
    pub probability: String,
    pub prediction_default: String,
    pub prediction_threshold: String,
    pub threshold: String,
    /// Features the server reports having used, when it says so.
    pub used_features: Option<Vec<String>>,
}

impl Default for ResultDisplay {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl ResultDisplay {
    pub fn placeholder() -> Self {
        Self {
            probability: PLACEHOLDER.to_string(),
            prediction_default: PLACEHOLDER.to_string(),
            prediction_threshold: PLACEHOLDER.to_string(),
            threshold: PLACEHOLDER.to_string(),
            used_features: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }

    pub fn reset(&mut self) {
        *self = Self::placeholder();
    }

    pub fn render(&mut self, response: &PredictionResponse) {
        self.probability = to_fixed(response.probability.unwrap_or(0.0), 4);
        self.prediction_default = label_text(response.prediction_default.as_ref());
        self.prediction_threshold = label_text(response.prediction_threshold.as_ref());
        self.threshold = to_fixed(response.threshold.unwrap_or(0.0), 2);
        self.used_features = response.used_features.clone();
    }
}

/// Enough fractional digits to print any `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Fixed-point text with `digits` decimals. Exact ties round away from zero.
fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_finite() && value != 0.0 && is_exact_tie(value, digits) {
        // One ulp further from zero is past the tie and rounds outward.
        let outward = f64::from_bits(value.to_bits() + 1);
        return format!("{outward:.digits$}");
    }
    format!("{value:.digits$}")
}

/// True when the exact value ends in a single `5` right after `digits` decimals.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    let Some(rest) = fraction.get(digits..) else {
        return false;
    };
    let mut rest = rest.chars();
    rest.next() == Some('5') && rest.all(|digit| digit == '0')
}

/// Labels are opaque: strings verbatim, other JSON values as JSON text.
fn label_text(label: Option<&Value>) -> String {
    match label {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
