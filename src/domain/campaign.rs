//! Campaign form state as entered by the user.

/// Audience categories known to the recommendation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudienceType {
    #[default]
    General,
    Students,
    ItWorkers,
    Shoppers,
    Residents,
    Tourists,
}

impl AudienceType {
    pub const ALL: [AudienceType; 6] = [
        AudienceType::General,
        AudienceType::Students,
        AudienceType::ItWorkers,
        AudienceType::Shoppers,
        AudienceType::Residents,
        AudienceType::Tourists,
    ];

    /// Wire representation sent in the payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceType::General => "general",
            AudienceType::Students => "students",
            AudienceType::ItWorkers => "it_workers",
            AudienceType::Shoppers => "shoppers",
            AudienceType::Residents => "residents",
            AudienceType::Tourists => "tourists",
        }
    }

    /// Human-readable label for the interactive form.
    pub fn label(&self) -> &'static str {
        match self {
            AudienceType::General => "General",
            AudienceType::Students => "Students",
            AudienceType::ItWorkers => "IT workers",
            AudienceType::Shoppers => "Shoppers",
            AudienceType::Residents => "Residents",
            AudienceType::Tourists => "Tourists",
        }
    }
}

/// Raw form state. Numeric fields stay as entered; coercion happens when the
/// payload is built, matching the submit-time behavior of the original form.
/// The audience type is a free string: values outside [`AudienceType::ALL`]
/// are forwarded to the service uninspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignForm {
    pub budget: String,
    pub audience_type: String,
    pub age_min: String,
    pub age_max: String,
}

impl Default for CampaignForm {
    fn default() -> Self {
        Self {
            budget: "60000".to_string(),
            audience_type: AudienceType::General.as_str().to_string(),
            age_min: "18".to_string(),
            age_max: "60".to_string(),
        }
    }
}
