//! Submission flow: build the payload, call the service, settle the outcome.

use crate::app::AppContext;
use crate::domain::{CampaignForm, PredictRequest, RequestOutcome};
use crate::ports::RecommendationClient;

/// Submit the form and settle the resulting outcome.
///
/// Every failure between payload construction and response parsing lands in
/// a `Failed` outcome; this never returns an error. Log lines on stderr are
/// advisory only. If the submission has been superseded by a newer one when
/// the reply arrives, the stale outcome is discarded by the state container.
pub fn submit<C: RecommendationClient>(
    ctx: &mut AppContext<C>,
    form: &CampaignForm,
) -> RequestOutcome {
    let ticket = ctx.submissions_mut().begin();
    println!("Status: {}", ctx.submissions().status_line());

    let request = PredictRequest::from_form(form);
    let reply = match request.to_body() {
        Ok(body) => {
            eprintln!("Sending payload: {body}");
            ctx.client().predict(&body)
        }
        Err(err) => Err(err),
    };

    if let Ok(reply) = &reply {
        eprintln!("Response status: {}", reply.status);
    }

    let outcome = RequestOutcome::classify(reply.map(|reply| reply.body));
    eprintln!("Outcome: {}", outcome.status_line());

    ctx.submissions_mut().settle(ticket, outcome.clone());
    outcome
}
