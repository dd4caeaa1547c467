mod component_recommender;
mod linear;
mod pattern_classifier;
mod risk_regressor;

pub use component_recommender::ComponentRecommender;
pub use pattern_classifier::PatternClassifier;
pub use risk_regressor::RiskRegressor;
