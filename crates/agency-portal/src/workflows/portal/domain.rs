use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Intake form lifecycle. Staff move requests forward through external API calls; this crate only
/// reads the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum ProjectRequestStatus {
    Draft,
    Submitted,
    Reviewing,
    NeedsInfo,
    Approved,
    Rejected,
    Archived,
}

impl ProjectRequestStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::Reviewing => "REVIEWING",
            Self::NeedsInfo => "NEEDS_INFO",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Still awaiting a staff decision.
    pub const fn is_open(self) -> bool {
        matches!(
            self,
            Self::Draft | Self::Submitted | Self::Reviewing | Self::NeedsInfo
        )
    }

    pub const fn is_terminal(self) -> bool {
        !self.is_open()
    }

    /// `DRAFT -> SUBMITTED -> REVIEWING -> (NEEDS_INFO -> REVIEWING)* -> APPROVED | REJECTED`,
    /// with `ARCHIVED` reachable from every other state.
    pub const fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Archived, _) => false,
            (_, Self::Archived) => true,
            (Self::Draft, Self::Submitted)
            | (Self::Submitted, Self::Reviewing)
            | (Self::Reviewing, Self::NeedsInfo)
            | (Self::NeedsInfo, Self::Reviewing)
            | (Self::Reviewing, Self::Approved)
            | (Self::Reviewing, Self::Rejected) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ProjectRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project request status '{0}'")]
pub struct UnknownRequestStatus(pub String);

impl FromStr for ProjectRequestStatus {
    type Err = UnknownRequestStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_status(raw).as_str() {
            "DRAFT" => Ok(Self::Draft),
            "SUBMITTED" => Ok(Self::Submitted),
            "REVIEWING" => Ok(Self::Reviewing),
            "NEEDS_INFO" => Ok(Self::NeedsInfo),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "ARCHIVED" => Ok(Self::Archived),
            _ => Err(UnknownRequestStatus(raw.to_string())),
        }
    }
}

impl TryFrom<String> for ProjectRequestStatus {
    type Error = UnknownRequestStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A client-submitted intake form awaiting staff review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub id: String,
    pub status: ProjectRequestStatus,
    pub created_at: DateTime<Utc>,
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

/// Project status as stored by the portal. Values outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Lead,
    Active,
    Completed,
    Cancelled,
    Archived,
    Other(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lead => "LEAD",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Archived => "ARCHIVED",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_lead(&self) -> bool {
        matches!(self, Self::Lead)
    }

    /// Anything that is neither a lead nor finished counts as work in flight.
    pub fn is_in_flight(&self) -> bool {
        !matches!(
            self,
            Self::Lead | Self::Completed | Self::Cancelled | Self::Archived
        )
    }
}

impl From<&str> for ProjectStatus {
    fn from(raw: &str) -> Self {
        let normalized = normalize_status(raw);
        match normalized.as_str() {
            "LEAD" => Self::Lead,
            "ACTIVE" => Self::Active,
            "COMPLETED" => Self::Completed,
            "CANCELLED" | "CANCELED" => Self::Cancelled,
            "ARCHIVED" => Self::Archived,
            _ => {
                tracing::debug!(status = %raw, "unrecognised project status treated as in flight");
                Self::Other(raw.to_string())
            }
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub status: ProjectStatus,
}

fn normalize_status(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|ch| match ch {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_status_parses_loosely_and_serializes_canonically() {
        assert_eq!(
            "needs info".parse::<ProjectRequestStatus>(),
            Ok(ProjectRequestStatus::NeedsInfo)
        );
        assert_eq!(
            serde_json::to_value(ProjectRequestStatus::NeedsInfo).expect("serializes"),
            json!("NEEDS_INFO")
        );
        let parsed: ProjectRequestStatus =
            serde_json::from_value(json!("reviewing")).expect("deserializes");
        assert_eq!(parsed, ProjectRequestStatus::Reviewing);
    }

    #[test]
    fn unknown_request_status_is_rejected_at_the_boundary() {
        let err = serde_json::from_value::<ProjectRequestStatus>(json!("ON_HOLD"))
            .expect_err("unknown status rejected");
        assert!(err.to_string().contains("ON_HOLD"));
    }

    #[test]
    fn project_status_compares_case_insensitively() {
        assert_eq!(ProjectStatus::from("lead"), ProjectStatus::Lead);
        assert_eq!(ProjectStatus::from(" Canceled "), ProjectStatus::Cancelled);
        assert_eq!(
            ProjectStatus::from("in progress"),
            ProjectStatus::Other("in progress".to_string())
        );
    }

    #[test]
    fn project_status_round_trips_unknown_values() {
        let project: Project = serde_json::from_value(json!({
            "id": "p-1",
            "name": "Bakery refresh",
            "status": "on-hold"
        }))
        .expect("project deserializes");

        assert!(project.status.is_in_flight());
        assert_eq!(
            serde_json::to_value(&project).expect("serializes")["status"],
            json!("on-hold")
        );
        assert_eq!(project.status, ProjectStatus::Other("on-hold".to_string()));
    }

    #[test]
    fn terminal_project_statuses_are_not_in_flight() {
        for raw in ["LEAD", "completed", "Cancelled", "archived"] {
            assert!(!ProjectStatus::from(raw).is_in_flight(), "{raw}");
        }
        assert!(ProjectStatus::Active.is_in_flight());
    }
}
