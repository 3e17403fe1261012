//! Port definitions for external collaborators.

mod recommender;

pub use recommender::{MockRecommendationClient, PredictReply, RecommendationClient};
