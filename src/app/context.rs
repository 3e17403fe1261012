use crate::domain::SubmissionState;
use crate::ports::RecommendationClient;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: RecommendationClient> {
    client: C,
    submissions: SubmissionState,
}

impl<C: RecommendationClient> AppContext<C> {
    /// Create a new application context.
    pub fn new(client: C) -> Self {
        Self { client, submissions: SubmissionState::new() }
    }

    /// Get a reference to the recommendation client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the submission state.
    pub fn submissions(&self) -> &SubmissionState {
        &self.submissions
    }

    /// Get a mutable reference to the submission state.
    pub fn submissions_mut(&mut self) -> &mut SubmissionState {
        &mut self.submissions
    }
}
