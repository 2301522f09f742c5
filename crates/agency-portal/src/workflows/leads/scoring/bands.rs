use serde::{Deserialize, Serialize};

use super::config::{COOL_MIN, HOT_MIN, WARM_MIN};

/// Temperature band derived from a lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreLabel {
    Cold,
    Cool,
    Warm,
    Hot,
}

impl ScoreLabel {
    pub const fn from_score(score: u8) -> Self {
        if score >= HOT_MIN {
            Self::Hot
        } else if score >= WARM_MIN {
            Self::Warm
        } else if score >= COOL_MIN {
            Self::Cool
        } else {
            Self::Cold
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Cool => "Cool",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Cold => "❄️",
            Self::Cool => "🌤️",
            Self::Warm => "☀️",
            Self::Hot => "🔥",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Cold => "gray",
            Self::Cool => "blue",
            Self::Warm => "orange",
            Self::Hot => "red",
        }
    }

    pub const fn badge_classes(self) -> &'static str {
        match self {
            Self::Cold => "bg-gray-100 text-gray-700 border-gray-200",
            Self::Cool => "bg-blue-100 text-blue-800 border-blue-200",
            Self::Warm => "bg-orange-100 text-orange-800 border-orange-200",
            Self::Hot => "bg-red-100 text-red-800 border-red-200",
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Hot => "Top priority: reach out within 24 hours with a tailored website proposal.",
            Self::Warm => "Strong fit: schedule a discovery call this week.",
            Self::Cool => "Moderate fit: add to a nurture sequence and revisit next month.",
            Self::Cold => "Low priority: keep on file and monitor for changes.",
        }
    }
}

/// Label plus emoji as shown on prospect badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreLabelView {
    pub label: ScoreLabel,
    pub emoji: &'static str,
}

pub fn score_color(score: u8) -> &'static str {
    ScoreLabel::from_score(score).color()
}

pub fn score_label(score: u8) -> ScoreLabelView {
    let label = ScoreLabel::from_score(score);
    ScoreLabelView {
        label,
        emoji: label.emoji(),
    }
}

pub fn score_badge_classes(score: u8) -> &'static str {
    ScoreLabel::from_score(score).badge_classes()
}
