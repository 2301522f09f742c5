mod bands;
pub(crate) mod config;
mod rules;

pub use bands::{score_badge_classes, score_color, score_label, ScoreLabel, ScoreLabelView};
pub use config::{
    CategoryWeight, LeadScoringConfig, RevenueTier, SizeTier, TargetMetro, WebsiteWeights,
};

use super::domain::ProspectProfile;
use config::TOTAL_MAX;
use serde::{Deserialize, Serialize};

/// Stateless evaluator that applies a weighting policy to a prospect.
#[derive(Debug, Clone, Default)]
pub struct LeadScoringEngine {
    config: LeadScoringConfig,
}

impl LeadScoringEngine {
    pub fn new(config: LeadScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LeadScoringConfig {
        &self.config
    }

    pub fn score(&self, profile: &ProspectProfile) -> ScoreResult {
        let breakdown = rules::score_profile(profile, &self.config);
        let total = breakdown.sum().min(u16::from(TOTAL_MAX)) as u8;
        let label = ScoreLabel::from_score(total);

        ScoreResult {
            total,
            breakdown,
            label,
            recommendation: label.recommendation().to_string(),
        }
    }
}

/// Scores a prospect with the standard policy.
pub fn calculate_lead_score_detailed(profile: &ProspectProfile) -> ScoreResult {
    LeadScoringEngine::default().score(profile)
}

/// Per-attribute contributions, each bounded by its weight ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub website_score: u8,
    pub revenue_score: u8,
    pub category_score: u8,
    pub location_score: u8,
    pub size_score: u8,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> u16 {
        [
            self.website_score,
            self.revenue_score,
            self.category_score,
            self.location_score,
            self.size_score,
        ]
        .into_iter()
        .map(u16::from)
        .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total: u8,
    pub breakdown: ScoreBreakdown,
    pub label: ScoreLabel,
    pub recommendation: String,
}
