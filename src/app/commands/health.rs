//! Service reachability check against `GET /health`.

use crate::ports::RecommendationClient;

/// Outcome of a health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Service answered; status and body are reported as received.
    Reachable { status: u16, body: String },
    /// Transport-level failure.
    Unreachable { message: String },
}

pub fn execute<C: RecommendationClient>(client: &C) -> HealthStatus {
    match client.health() {
        Ok(reply) => HealthStatus::Reachable { status: reply.status, body: reply.body },
        Err(err) => HealthStatus::Unreachable { message: err.to_string() },
    }
}
