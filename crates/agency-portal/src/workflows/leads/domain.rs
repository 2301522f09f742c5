use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for prospects stored by the CRM.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProspectId(pub String);

impl ProspectId {
    const PREFIX: &'static str = "prospect-";

    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!("{}{sequence:06}", Self::PREFIX))
    }

    /// Numeric part of a service-assigned id.
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }
}

impl fmt::Display for ProspectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reviewer assessment of an existing website. Lower tiers leave more room for a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebsiteQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl WebsiteQuality {
    pub const fn ordered() -> [Self; 4] {
        [Self::Poor, Self::Fair, Self::Good, Self::Excellent]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown website quality '{0}'")]
pub struct UnknownWebsiteQuality(pub String);

impl FromStr for WebsiteQuality {
    type Err = UnknownWebsiteQuality;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "POOR" => Ok(Self::Poor),
            "FAIR" => Ok(Self::Fair),
            "GOOD" => Ok(Self::Good),
            "EXCELLENT" => Ok(Self::Excellent),
            _ => Err(UnknownWebsiteQuality(raw.to_string())),
        }
    }
}

/// Attributes of a prospect that feed the lead score. Every field is optional; missing data maps
/// to a fixed default contribution instead of an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default)]
    pub has_website: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_website_quality")]
    pub website_quality: Option<WebsiteQuality>,
    #[serde(default)]
    pub annual_revenue: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub employee_count: Option<u32>,
}

impl ProspectProfile {
    /// Whether the prospect has a website. A quality rating implies one exists.
    pub fn website_presence(&self) -> Option<bool> {
        self.has_website
            .or_else(|| self.website_quality.map(|_| true))
    }

    pub(crate) fn normalized_category(&self) -> Option<String> {
        non_blank(self.category.as_deref()).map(str::to_lowercase)
    }

    pub(crate) fn normalized_city(&self) -> Option<&str> {
        non_blank(self.city.as_deref())
    }

    pub(crate) fn normalized_state(&self) -> Option<&str> {
        non_blank(self.state.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Lenient tier parsing: unrecognised ratings are logged and treated as unknown.
fn deserialize_website_quality<'de, D>(deserializer: D) -> Result<Option<WebsiteQuality>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.parse::<WebsiteQuality>() {
        Ok(quality) => Some(quality),
        Err(err) => {
            tracing::warn!(%err, "ignoring website quality");
            None
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quality_parses_case_insensitively() {
        assert_eq!(" good ".parse::<WebsiteQuality>(), Ok(WebsiteQuality::Good));
        assert_eq!("EXCELLENT".parse::<WebsiteQuality>(), Ok(WebsiteQuality::Excellent));
        assert!("stellar".parse::<WebsiteQuality>().is_err());
    }

    #[test]
    fn profile_accepts_portal_payload() {
        let profile: ProspectProfile = serde_json::from_value(json!({
            "hasWebsite": true,
            "websiteQuality": "fair",
            "annualRevenue": 420000.0,
            "category": "Family Dentist",
            "city": "Austin",
            "state": "TX",
            "employeeCount": 12
        }))
        .expect("payload deserializes");

        assert_eq!(profile.website_quality, Some(WebsiteQuality::Fair));
        assert_eq!(profile.employee_count, Some(12));
        assert_eq!(profile.normalized_category().as_deref(), Some("family dentist"));
    }

    #[test]
    fn unknown_quality_and_nulls_degrade_to_none() {
        let profile: ProspectProfile = serde_json::from_value(json!({
            "websiteQuality": "stellar",
            "annualRevenue": null,
            "city": "   "
        }))
        .expect("payload deserializes");

        assert_eq!(profile.website_quality, None);
        assert_eq!(profile.annual_revenue, None);
        assert_eq!(profile.normalized_city(), None);
    }

    #[test]
    fn quality_rating_implies_website() {
        let profile = ProspectProfile {
            website_quality: Some(WebsiteQuality::Poor),
            ..ProspectProfile::default()
        };
        assert_eq!(profile.website_presence(), Some(true));
        assert_eq!(ProspectProfile::default().website_presence(), None);
    }
}
