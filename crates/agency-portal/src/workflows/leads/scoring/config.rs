use serde::{Deserialize, Serialize};

use super::super::domain::WebsiteQuality;

pub const WEBSITE_MAX: u8 = 30;
pub const REVENUE_MAX: u8 = 25;
pub const CATEGORY_MAX: u8 = 20;
pub const LOCATION_MAX: u8 = 15;
pub const SIZE_MAX: u8 = 10;
pub const TOTAL_MAX: u8 = 100;

pub const HOT_MIN: u8 = 80;
pub const WARM_MIN: u8 = 60;
pub const COOL_MIN: u8 = 40;

/// Weighting policy for the lead score. Ceilings are enforced by the rules regardless of the
/// values configured here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadScoringConfig {
    pub website: WebsiteWeights,
    pub revenue_tiers: Vec<RevenueTier>,
    pub revenue_unknown: u8,
    pub categories: Vec<CategoryWeight>,
    pub category_unknown: u8,
    pub target_metros: Vec<TargetMetro>,
    pub target_states: Vec<String>,
    pub metro_score: u8,
    pub state_score: u8,
    pub elsewhere_score: u8,
    pub size_tiers: Vec<SizeTier>,
    pub size_unknown: u8,
}

impl LeadScoringConfig {
    /// Default policy used by the agency CRM.
    pub fn standard() -> Self {
        Self {
            website: WebsiteWeights::standard(),
            revenue_tiers: vec![
                RevenueTier::new(0.0, 5),
                RevenueTier::new(100_000.0, 10),
                RevenueTier::new(250_000.0, 15),
                RevenueTier::new(500_000.0, 20),
                RevenueTier::new(1_000_000.0, 25),
            ],
            revenue_unknown: 10,
            categories: standard_categories(),
            category_unknown: 5,
            target_metros: ["Austin", "Round Rock", "Cedar Park", "Georgetown", "San Marcos"]
                .into_iter()
                .map(|city| TargetMetro::new(city, "TX"))
                .collect(),
            target_states: vec!["TX".to_string()],
            metro_score: 15,
            state_score: 8,
            elsewhere_score: 3,
            size_tiers: vec![
                SizeTier::new(0, 2),
                SizeTier::new(1, 4),
                SizeTier::new(6, 6),
                SizeTier::new(21, 8),
                SizeTier::new(51, 10),
            ],
            size_unknown: 5,
        }
    }
}

impl Default for LeadScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Website opportunity points. No website is the largest opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteWeights {
    pub no_website: u8,
    pub poor: u8,
    pub fair: u8,
    pub good: u8,
    pub excellent: u8,
    pub unknown_quality: u8,
    pub unknown_presence: u8,
}

impl WebsiteWeights {
    pub const fn standard() -> Self {
        Self {
            no_website: 30,
            poor: 25,
            fair: 18,
            good: 10,
            excellent: 5,
            unknown_quality: 15,
            unknown_presence: 15,
        }
    }

    pub const fn for_quality(&self, quality: WebsiteQuality) -> u8 {
        match quality {
            WebsiteQuality::Poor => self.poor,
            WebsiteQuality::Fair => self.fair,
            WebsiteQuality::Good => self.good,
            WebsiteQuality::Excellent => self.excellent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueTier {
    pub min_revenue: f64,
    pub score: u8,
}

impl RevenueTier {
    pub const fn new(min_revenue: f64, score: u8) -> Self {
        Self { min_revenue, score }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeTier {
    pub min_employees: u32,
    pub score: u8,
}

impl SizeTier {
    pub const fn new(min_employees: u32, score: u8) -> Self {
        Self {
            min_employees,
            score,
        }
    }
}

/// Category fit. `keyword` matches whole words of the lowercased category (a
/// trailing plural `s` is accepted); a `stem` keyword matches as a word prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWeight {
    pub keyword: String,
    pub score: u8,
    #[serde(default)]
    pub stem: bool,
}

impl CategoryWeight {
    pub fn new(keyword: &str, score: u8) -> Self {
        Self {
            keyword: keyword.trim().to_lowercase(),
            score,
            stem: false,
        }
    }

    pub fn stem(keyword: &str, score: u8) -> Self {
        Self {
            stem: true,
            ..Self::new(keyword, score)
        }
    }

    /// Whether the keyword's words appear consecutively in `words`.
    pub fn matches(&self, words: &[&str]) -> bool {
        let keyword: Vec<&str> = self.keyword.split_whitespace().collect();
        if keyword.is_empty() {
            return false;
        }
        words.windows(keyword.len()).any(|window| {
            window
                .iter()
                .zip(&keyword)
                .all(|(word, part)| self.word_matches(word, part))
        })
    }

    fn word_matches(&self, word: &str, part: &str) -> bool {
        if self.stem {
            word.starts_with(part)
        } else {
            word == part || word.strip_suffix('s') == Some(part)
        }
    }
}

/// A city the agency actively serves. State codes are stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetMetro {
    pub city: String,
    pub state: String,
}

impl TargetMetro {
    pub fn new(city: &str, state: &str) -> Self {
        Self {
            city: city.trim().to_string(),
            state: state.trim().to_ascii_uppercase(),
        }
    }

    /// A missing state still matches on city alone.
    pub fn matches(&self, city: &str, state: Option<&str>) -> bool {
        self.city.eq_ignore_ascii_case(city.trim())
            && state.map_or(true, |state| self.state.eq_ignore_ascii_case(state.trim()))
    }
}

fn standard_categories() -> Vec<CategoryWeight> {
    let words = [
        ("restaurant", 20),
        ("dental", 20),
        ("dentist", 20),
        ("medical", 18),
        ("clinic", 18),
        ("law", 18),
        ("lawyer", 18),
        ("legal", 18),
        ("attorney", 18),
        ("real estate", 17),
        ("realtor", 17),
        ("contractor", 16),
        ("construction", 16),
        ("hvac", 16),
        ("roofing", 16),
        ("lawn", 15),
        ("bakery", 15),
        ("cafe", 15),
        ("coffee", 15),
        ("salon", 14),
        ("spa", 14),
        ("fitness", 14),
        ("gym", 14),
        ("auto", 13),
        ("automotive", 13),
        ("retail", 12),
        ("boutique", 12),
        ("insurance", 12),
        ("accounting", 12),
        ("church", 8),
        ("nonprofit", 8),
    ];
    let stems = [
        ("orthodont", 20),
        ("chiropract", 18),
        ("plumb", 16),
        ("landscap", 15),
    ];

    words
        .into_iter()
        .map(|(keyword, score)| CategoryWeight::new(keyword, score))
        .chain(
            stems
                .into_iter()
                .map(|(keyword, score)| CategoryWeight::stem(keyword, score)),
        )
        .collect()
}
