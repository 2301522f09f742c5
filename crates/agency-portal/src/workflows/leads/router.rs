use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ProspectId, ProspectProfile};
use super::repository::ProspectRepository;
use super::scoring::ScoreResult;
use super::service::{LeadScoringService, LeadServiceError};

const DEFAULT_RANKED_LIMIT: usize = 20;

/// Router exposing stateless scoring and the stored prospect pipeline.
pub fn lead_router<R>(service: Arc<LeadScoringService<R>>) -> Router
where
    R: ProspectRepository + 'static,
{
    Router::new()
        .route("/api/v1/leads/score", post(score_handler::<R>))
        .route(
            "/api/v1/prospects",
            post(register_handler::<R>).get(ranked_handler::<R>),
        )
        .route("/api/v1/prospects/:prospect_id", get(prospect_handler::<R>))
        .route(
            "/api/v1/prospects/:prospect_id/rescore",
            post(rescore_handler::<R>),
        )
        .with_state(service)
}

/// Score result with the presentation tokens the portal renders next to it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreView {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub emoji: &'static str,
    pub color: &'static str,
    pub badge_classes: &'static str,
}

impl From<ScoreResult> for ScoreView {
    fn from(result: ScoreResult) -> Self {
        let label = result.label;
        Self {
            result,
            emoji: label.emoji(),
            color: label.color(),
            badge_classes: label.badge_classes(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RankedQuery {
    pub(crate) limit: Option<usize>,
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    Json(profile): Json<ProspectProfile>,
) -> Json<ScoreView>
where
    R: ProspectRepository + 'static,
{
    Json(ScoreView::from(service.engine().score(&profile)))
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    Json(profile): Json<ProspectProfile>,
) -> Response
where
    R: ProspectRepository + 'static,
{
    match service.register(profile) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => error_response(err, None),
    }
}

pub(crate) async fn prospect_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    Path(prospect_id): Path<String>,
) -> Response
where
    R: ProspectRepository + 'static,
{
    let id = ProspectId(prospect_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => error_response(err, Some(&id)),
    }
}

pub(crate) async fn rescore_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    Path(prospect_id): Path<String>,
) -> Response
where
    R: ProspectRepository + 'static,
{
    let id = ProspectId(prospect_id);
    match service.rescore(&id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => error_response(err, Some(&id)),
    }
}

pub(crate) async fn ranked_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    Query(query): Query<RankedQuery>,
) -> Response
where
    R: ProspectRepository + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_RANKED_LIMIT);
    match service.ranked(limit) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => error_response(err, None),
    }
}

fn error_response(err: LeadServiceError, id: Option<&ProspectId>) -> Response {
    let status = err.status_code();

    let payload = match id {
        Some(id) => json!({ "prospect_id": id.0, "error": err.to_string() }),
        None => json!({ "error": err.to_string() }),
    };
    (status, Json(payload)).into_response()
}
