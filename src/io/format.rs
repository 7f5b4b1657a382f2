//! Result formatting for text and JSON output.

use serde::{Serialize, Serializer};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Render a result as plain decimal text.
///
/// With `precision` unset the shortest round-trip digits are written in
/// positional form, never with an exponent, and whole numbers keep a `.0`
/// suffix (`5.0`, `10000000000000000.0`). Non-finite values print as `NaN`,
/// `Infinity` and `-Infinity`.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }
    match precision {
        Some(places) => format!("{value:.places$}"),
        None => {
            let mut text = value.to_string();
            if !text.contains('.') {
                text.push_str(".0");
            }
            text
        }
    }
}

/// An `f64` that stays valid JSON: finite values are numbers, the rest strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonNumber(pub f64);

impl Serialize for JsonNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_str(&format_number(self.0, None))
        }
    }
}
