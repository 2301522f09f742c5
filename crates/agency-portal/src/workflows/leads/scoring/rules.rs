use super::super::domain::ProspectProfile;
use super::config::{
    LeadScoringConfig, CATEGORY_MAX, LOCATION_MAX, REVENUE_MAX, SIZE_MAX, WEBSITE_MAX,
};
use super::ScoreBreakdown;

pub(crate) fn score_profile(profile: &ProspectProfile, config: &LeadScoringConfig) -> ScoreBreakdown {
    ScoreBreakdown {
        website_score: website_score(profile, config),
        revenue_score: revenue_score(profile.annual_revenue, config),
        category_score: category_score(profile, config),
        location_score: location_score(profile, config),
        size_score: size_score(profile.employee_count, config),
    }
}

pub(crate) fn website_score(profile: &ProspectProfile, config: &LeadScoringConfig) -> u8 {
    let weights = &config.website;
    let score = match (profile.website_presence(), profile.website_quality) {
        (Some(false), _) => weights.no_website,
        (Some(true), Some(quality)) => weights.for_quality(quality),
        (Some(true), None) => weights.unknown_quality,
        (None, _) => weights.unknown_presence,
    };
    score.min(WEBSITE_MAX)
}

/// Highest tier reached, so the score never drops as revenue grows.
pub(crate) fn revenue_score(annual_revenue: Option<f64>, config: &LeadScoringConfig) -> u8 {
    let score = match annual_revenue {
        None => config.revenue_unknown,
        Some(revenue) => config
            .revenue_tiers
            .iter()
            .filter(|tier| revenue >= tier.min_revenue)
            .map(|tier| tier.score)
            .max()
            .unwrap_or(0),
    };
    score.min(REVENUE_MAX)
}

pub(crate) fn category_score(profile: &ProspectProfile, config: &LeadScoringConfig) -> u8 {
    let score = profile
        .normalized_category()
        .and_then(|category| {
            let words: Vec<&str> = category
                .split(|ch: char| !ch.is_alphanumeric())
                .filter(|word| !word.is_empty())
                .collect();
            config
                .categories
                .iter()
                .filter(|weight| weight.matches(&words))
                .map(|weight| weight.score)
                .max()
        })
        .unwrap_or(config.category_unknown);
    score.min(CATEGORY_MAX)
}

pub(crate) fn location_score(profile: &ProspectProfile, config: &LeadScoringConfig) -> u8 {
    let city = profile.normalized_city();
    let state = profile.normalized_state();

    let in_metro = city.is_some_and(|city| {
        config
            .target_metros
            .iter()
            .any(|metro| metro.matches(city, state))
    });
    let in_state = state.is_some_and(|state| {
        config
            .target_states
            .iter()
            .any(|target| target.eq_ignore_ascii_case(state))
    });

    let score = if in_metro {
        config.metro_score
    } else if in_state {
        config.state_score
    } else if city.is_some() || state.is_some() {
        config.elsewhere_score
    } else {
        0
    };
    score.min(LOCATION_MAX)
}

pub(crate) fn size_score(employee_count: Option<u32>, config: &LeadScoringConfig) -> u8 {
    let score = match employee_count {
        None => config.size_unknown,
        Some(count) => config
            .size_tiers
            .iter()
            .filter(|tier| count >= tier.min_employees)
            .map(|tier| tier.score)
            .max()
            .unwrap_or(0),
    };
    score.min(SIZE_MAX)
}
