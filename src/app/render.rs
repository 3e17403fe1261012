//! Plain-text rendering of submission outcomes.

use crate::domain::RequestOutcome;
use crate::domain::adspace::{AdSpaceView, format_score};

/// Render the status line, the error line when present, and one block per
/// result item. Absent score fields are omitted rather than shown as NaN.
pub fn render_outcome(outcome: &RequestOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!("Status: {}\n", outcome.status_line()));

    if let Some(error) = outcome.error_line() {
        out.push_str(&format!("Error: {error}\n"));
    }

    match outcome {
        RequestOutcome::Succeeded(items) => {
            for item in items {
                out.push('\n');
                out.push_str(&render_item(&AdSpaceView::from_value(item)));
            }
        }
        RequestOutcome::SucceededEmpty => out.push_str("No results to show.\n"),
        _ => {}
    }

    out
}

fn render_item(view: &AdSpaceView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", view.name.as_deref().unwrap_or("(unnamed ad space)")));

    if let Some(kind) = &view.kind {
        out.push_str(&format!("  Type: {kind}\n"));
    }
    if let Some(price) = view.price_per_month {
        out.push_str(&format!("  Price per month: ₹{price}\n"));
    }
    if let Some(impressions) = view.predicted_impressions {
        out.push_str(&format!("  Predicted impressions: {impressions}\n"));
    }
    if let Some(score) = format_score(view.audience_match) {
        out.push_str(&format!("  Audience match: {score}\n"));
    }
    if let Some(score) = format_score(view.final_score) {
        out.push_str(&format!("  Final score: {score}\n"));
    }

    out
}
