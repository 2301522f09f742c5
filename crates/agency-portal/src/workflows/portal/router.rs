use axum::{routing::post, Json, Router};
use tracing::debug;

use super::dashboard::{ClientDashboard, ClientSnapshot};

pub fn portal_router() -> Router {
    Router::new().route("/api/v1/portal/dashboard", post(dashboard_handler))
}

pub(crate) async fn dashboard_handler(Json(snapshot): Json<ClientSnapshot>) -> Json<ClientDashboard> {
    let dashboard = snapshot.dashboard();
    debug!(
        state = ?dashboard.state,
        requests = snapshot.project_requests.len(),
        projects = snapshot.projects.len(),
        "dashboard state resolved"
    );
    Json(dashboard)
}
