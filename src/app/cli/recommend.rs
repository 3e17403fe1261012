use dialoguer::{Input, Select};

use crate::app::render::render_outcome;
use crate::domain::{AppError, AudienceType, CampaignForm, RequestOutcome};

pub(super) fn run_recommend(
    budget: Option<String>,
    audience: Option<String>,
    age_min: Option<String>,
    age_max: Option<String>,
    api_url: Option<String>,
) -> Result<i32, AppError> {
    let form = resolve_form(budget, audience, age_min, age_max)?;

    let outcome = crate::recommend(&form, api_url.as_deref())?;
    print!("{}", render_outcome(&outcome));

    match outcome {
        RequestOutcome::Failed(_) => Ok(1),
        _ => Ok(0),
    }
}

/// Fill in form fields missing from the command line via interactive
/// prompts, mirroring the original submission form. Flag values are used
/// as given; only absent fields prompt.
fn resolve_form(
    budget: Option<String>,
    audience: Option<String>,
    age_min: Option<String>,
    age_max: Option<String>,
) -> Result<CampaignForm, AppError> {
    let defaults = CampaignForm::default();

    let budget = match budget {
        Some(value) => value,
        None => prompt_text("Monthly budget (₹)", &defaults.budget)?,
    };
    let audience_type = match audience {
        Some(value) => value,
        None => prompt_audience()?,
    };
    let age_min = match age_min {
        Some(value) => value,
        None => prompt_text("Minimum audience age", &defaults.age_min)?,
    };
    let age_max = match age_max {
        Some(value) => value,
        None => prompt_text("Maximum audience age", &defaults.age_max)?,
    };

    Ok(CampaignForm { budget, audience_type, age_min, age_max })
}

fn prompt_text(prompt: &str, default: &str) -> Result<String, AppError> {
    Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .map_err(|e| AppError::Prompt(format!("{prompt}: {e}")))
}

fn prompt_audience() -> Result<String, AppError> {
    let items: Vec<&str> = AudienceType::ALL.iter().map(|audience| audience.label()).collect();

    let selection = Select::new()
        .with_prompt("Audience type")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| AppError::Prompt(format!("Audience type: {e}")))?;

    Ok(AudienceType::ALL[selection].as_str().to_string())
}
