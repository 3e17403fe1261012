//! Render-time view over result items.
//!
//! Items come back verbatim from the service and individual fields may be
//! absent or malformed. The view reads each field leniently so a bad item
//! degrades to blank fields instead of failing the whole render.

use serde_json::Value;

/// Lenient projection of one recommended ad space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdSpaceView {
    pub id: Option<String>,
    pub name: Option<String>,
    pub kind: Option<String>,
    pub price_per_month: Option<f64>,
    pub predicted_impressions: Option<f64>,
    pub audience_match: Option<f64>,
    pub final_score: Option<f64>,
}

impl AdSpaceView {
    pub fn from_value(item: &Value) -> Self {
        Self {
            id: field_text(item, "id"),
            name: field_text(item, "name"),
            kind: field_text(item, "type"),
            price_per_month: item.get("price_per_month").and_then(Value::as_f64),
            predicted_impressions: item.get("predicted_impressions").and_then(Value::as_f64),
            audience_match: item.get("audience_match").and_then(Value::as_f64),
            final_score: item.get("final_score").and_then(Value::as_f64),
        }
    }
}

/// Read a field as display text, accepting strings and numbers.
fn field_text(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Format a score to two decimal places, or nothing when absent.
pub fn format_score(score: Option<f64>) -> Option<String> {
    score.map(|value| format!("{value:.2}"))
}
