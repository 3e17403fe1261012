//! Service implementations backing the ports.

mod recommender_http;

pub use recommender_http::HttpRecommendationClient;
