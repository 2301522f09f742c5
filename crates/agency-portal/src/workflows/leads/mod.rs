//! Prospect lead scoring for the agency CRM.
//!
//! Scoring is pure: a [`ProspectProfile`] goes in, a [`ScoreResult`] comes out. The service and
//! router layers persist scored prospects and expose them over HTTP.

pub mod domain;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ProspectId, ProspectProfile, UnknownWebsiteQuality, WebsiteQuality};
pub use repository::{ProspectRecord, ProspectRepository, RepositoryError};
pub use router::{lead_router, ScoreView};
pub use scoring::{
    calculate_lead_score_detailed, score_badge_classes, score_color, score_label,
    CategoryWeight, LeadScoringConfig, LeadScoringEngine, RevenueTier, ScoreBreakdown,
    ScoreLabel, ScoreLabelView, ScoreResult, SizeTier, TargetMetro, WebsiteWeights,
};
pub use service::{LeadScoringService, LeadServiceError};
