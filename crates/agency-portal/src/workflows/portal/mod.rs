//! Client portal onboarding state.
//!
//! The resolver reads a client's project requests and projects and decides which dashboard
//! variant to render. It never changes either collection.

pub mod dashboard;
pub mod domain;
pub mod router;

#[cfg(test)]
mod tests;

pub use dashboard::{
    active_project_request, dashboard_state, should_show_pre_client_dashboard, ClientDashboard,
    ClientSnapshot, DashboardState,
};
pub use domain::{
    Project, ProjectRequest, ProjectRequestStatus, ProjectStatus, UnknownRequestStatus,
};
pub use router::portal_router;
