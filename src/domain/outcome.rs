//! Outcome classification and the submission state container.

use serde_json::Value;

use super::error::AppError;

/// Discriminated result of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// Request sent, response not yet settled.
    Pending,
    /// Service returned a non-empty array; items are kept verbatim.
    Succeeded(Vec<Value>),
    /// Service returned valid JSON that was empty or not an array.
    SucceededEmpty,
    /// Transport failure, or a body that was not JSON.
    Failed(String),
}

impl RequestOutcome {
    /// Classify a raw response body, or a transport-level failure, into an
    /// outcome. Any HTTP status is acceptable; only the body shape matters.
    /// Error objects such as `{"detail": "..."}` parse as JSON but are not
    /// arrays, so they classify as empty rather than failed.
    pub fn classify(result: Result<String, AppError>) -> Self {
        let body = match result {
            Ok(body) => body,
            Err(err) => return RequestOutcome::Failed(err.to_string()),
        };
        match serde_json::from_str::<Value>(&body) {
            Err(_) => RequestOutcome::Failed(AppError::MalformedResponse { body }.to_string()),
            Ok(Value::Array(items)) if !items.is_empty() => RequestOutcome::Succeeded(items),
            Ok(_) => RequestOutcome::SucceededEmpty,
        }
    }

    /// One-line status reflecting the latest known state.
    pub fn status_line(&self) -> String {
        match self {
            RequestOutcome::Pending => "Sending request...".to_string(),
            RequestOutcome::Succeeded(items) => {
                format!("Found {} matching ad spaces", items.len())
            }
            RequestOutcome::SucceededEmpty => "No results returned".to_string(),
            RequestOutcome::Failed(_) => "Request failed".to_string(),
        }
    }

    /// Diagnostic message, present only for failures.
    pub fn error_line(&self) -> Option<&str> {
        match self {
            RequestOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Ticket identifying one submission. Only the most recently issued ticket
/// may settle the displayed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// State container for the current submission. Exactly one outcome is
/// current at any time and it is replaced wholesale, never mutated in place.
/// Starting a new submission supersedes any in-flight one: a late response
/// carrying a stale ticket is discarded instead of overwriting the fresher
/// outcome.
#[derive(Debug, Default)]
pub struct SubmissionState {
    issued: u64,
    outcome: Option<RequestOutcome>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a submission: the visible state becomes `Pending`, which also
    /// clears any previously displayed error.
    pub fn begin(&mut self) -> SubmissionTicket {
        self.issued += 1;
        self.outcome = Some(RequestOutcome::Pending);
        SubmissionTicket(self.issued)
    }

    /// Settle a submission. Returns whether the outcome was applied; a stale
    /// ticket leaves the current outcome untouched.
    pub fn settle(&mut self, ticket: SubmissionTicket, outcome: RequestOutcome) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        self.outcome = Some(outcome);
        true
    }

    /// Latest known outcome; `None` before the first submission.
    pub fn outcome(&self) -> Option<&RequestOutcome> {
        self.outcome.as_ref()
    }

    pub fn status_line(&self) -> String {
        match &self.outcome {
            Some(outcome) => outcome.status_line(),
            None => "Ready to request recommendations".to_string(),
        }
    }
}
