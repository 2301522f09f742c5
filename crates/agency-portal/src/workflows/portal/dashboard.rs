use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{Project, ProjectRequest};

/// Which dashboard variant a client should see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashboardState {
    PreClient,
    Empty,
    LeadOnly,
    Active,
}

impl DashboardState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PreClient => "Pre-client onboarding",
            Self::Empty => "No projects yet",
            Self::LeadOnly => "Leads only",
            Self::Active => "Active client",
        }
    }
}

/// Resolved dashboard for one client, recomputed from fresh reads on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDashboard {
    pub state: DashboardState,
    pub lead_projects: Vec<Project>,
    pub active_project_request: Option<ProjectRequest>,
}

/// Both collections of a single client, as read by the portal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSnapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub project_requests: Vec<ProjectRequest>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects: Vec<Project>,
}

impl ClientSnapshot {
    pub fn dashboard(&self) -> ClientDashboard {
        dashboard_state(&self.project_requests, &self.projects)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Classify a client's onboarding progress.
///
/// Any in-flight project makes the client `ACTIVE`. Without one, an open project request puts
/// them in `PRE_CLIENT`; no projects at all is `EMPTY`; anything else is `LEAD_ONLY`.
pub fn dashboard_state(requests: &[ProjectRequest], projects: &[Project]) -> ClientDashboard {
    let active_project_request = active_project_request(requests).cloned();
    let lead_projects = projects
        .iter()
        .filter(|project| project.status.is_lead())
        .cloned()
        .collect();

    let state = if projects.iter().any(|project| project.status.is_in_flight()) {
        DashboardState::Active
    } else if active_project_request.is_some() {
        DashboardState::PreClient
    } else if projects.is_empty() {
        DashboardState::Empty
    } else {
        DashboardState::LeadOnly
    };

    ClientDashboard {
        state,
        lead_projects,
        active_project_request,
    }
}

pub fn should_show_pre_client_dashboard(requests: &[ProjectRequest], projects: &[Project]) -> bool {
    dashboard_state(requests, projects).state == DashboardState::PreClient
}

/// Most recently created open request. Equal timestamps keep the earlier entry.
pub fn active_project_request(requests: &[ProjectRequest]) -> Option<&ProjectRequest> {
    requests
        .iter()
        .filter(|request| request.status.is_open())
        .fold(None, |best: Option<&ProjectRequest>, candidate| match best {
            Some(current) if current.created_at >= candidate.created_at => Some(current),
            _ => Some(candidate),
        })
}
