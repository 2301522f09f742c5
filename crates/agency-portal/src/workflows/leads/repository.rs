use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ProspectId, ProspectProfile};
use super::scoring::ScoreResult;

/// Stored prospect with the score last computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectRecord {
    pub id: ProspectId,
    pub profile: ProspectProfile,
    pub score: ScoreResult,
    pub scored_at: DateTime<Utc>,
}

/// Storage abstraction so the scoring service can run against any backend.
pub trait ProspectRepository: Send + Sync {
    fn insert(&self, record: ProspectRecord) -> Result<ProspectRecord, RepositoryError>;
    fn update(&self, record: ProspectRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ProspectId) -> Result<Option<ProspectRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<ProspectRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
