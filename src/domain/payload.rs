//! Request payload sent to the `/predict` endpoint.

use serde::Serialize;
use serde_json::Number;

use super::campaign::CampaignForm;
use super::error::AppError;

/// Fixed campaign coordinates (Pune city centre). The form has no location
/// input; every request targets the same point.
pub const CAMPAIGN_LAT: f64 = 18.5204;
pub const CAMPAIGN_LNG: f64 = 73.8567;

/// JSON body for `POST /predict`. Declaration order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest {
    pub lat: f64,
    pub lng: f64,
    pub budget: Number,
    pub audience_age_min: Number,
    pub audience_age_max: Number,
    pub audience_type: String,
}

impl PredictRequest {
    /// Build the payload from raw form state. Numeric fields are coerced
    /// here; the audience type passes through verbatim even when it is not
    /// one of the known categories, and no age ordering is enforced.
    pub fn from_form(form: &CampaignForm) -> Self {
        Self {
            lat: CAMPAIGN_LAT,
            lng: CAMPAIGN_LNG,
            budget: coerce_number(&form.budget),
            audience_age_min: coerce_number(&form.age_min),
            audience_age_max: coerce_number(&form.age_max),
            audience_type: form.audience_type.clone(),
        }
    }

    /// Encode as the JSON request body. Deterministic: the same form always
    /// yields byte-identical output.
    pub fn to_body(&self) -> Result<String, AppError> {
        serde_json::to_string(self)
            .map_err(|e| AppError::config_error(format!("Failed to encode payload: {e}")))
    }
}

/// Coerce raw field text to a JSON number: integer when the text is an
/// integer, float otherwise, `0` when it parses as neither.
fn coerce_number(raw: &str) -> Number {
    let trimmed = raw.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Number::from(int);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .unwrap_or_else(|| Number::from(0))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn payload_matches_wire_format() {
        let form = CampaignForm {
            budget: "60000".to_string(),
            audience_type: "students".to_string(),
            age_min: "18".to_string(),
            age_max: "60".to_string(),
        };

        let body = PredictRequest::from_form(&form).to_body().unwrap();
        assert_eq!(
            body,
            r#"{"lat":18.5204,"lng":73.8567,"budget":60000,"audience_age_min":18,"audience_age_max":60,"audience_type":"students"}"#
        );
    }

    #[test]
    fn builder_is_idempotent() {
        let form = CampaignForm::default();
        let first = PredictRequest::from_form(&form).to_body().unwrap();
        let second = PredictRequest::from_form(&form).to_body().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn non_numeric_budget_coerces_to_zero() {
        assert_eq!(coerce_number("abc"), Number::from(0));
        assert_eq!(coerce_number(""), Number::from(0));
        assert_eq!(coerce_number("nan"), Number::from(0));
    }

    #[test]
    fn numeric_text_is_preserved() {
        assert_eq!(coerce_number("-500"), Number::from(-500));
        assert_eq!(coerce_number(" 42 "), Number::from(42));
        assert_eq!(coerce_number("12.5"), Number::from_f64(12.5).unwrap());
    }

    #[test]
    fn unknown_audience_type_passes_through() {
        let form = CampaignForm {
            audience_type: "astronauts".to_string(),
            ..CampaignForm::default()
        };
        let request = PredictRequest::from_form(&form);
        assert_eq!(request.audience_type, "astronauts");
    }

    #[test]
    fn inverted_age_range_is_forwarded_unchanged() {
        let form = CampaignForm {
            age_min: "60".to_string(),
            age_max: "18".to_string(),
            ..CampaignForm::default()
        };
        let request = PredictRequest::from_form(&form);
        assert_eq!(request.audience_age_min, Number::from(60));
        assert_eq!(request.audience_age_max, Number::from(18));
    }

    proptest! {
        #[test]
        fn coercion_is_total_and_deterministic(raw in ".*") {
            let first = coerce_number(&raw);
            let second = coerce_number(&raw);
            prop_assert_eq!(first, second);
        }
    }
}
