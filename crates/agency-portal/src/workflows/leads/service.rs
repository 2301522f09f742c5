use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use chrono::Utc;
use tracing::info;

use super::domain::{ProspectId, ProspectProfile};
use super::repository::{ProspectRecord, ProspectRepository, RepositoryError};
use super::scoring::{LeadScoringConfig, LeadScoringEngine};

/// Service composing the scoring engine with prospect storage.
pub struct LeadScoringService<R> {
    repository: Arc<R>,
    engine: Arc<LeadScoringEngine>,
    sequence: AtomicU64,
}

impl<R> LeadScoringService<R>
where
    R: ProspectRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: LeadScoringConfig) -> Self {
        Self {
            repository,
            engine: Arc::new(LeadScoringEngine::new(config)),
            sequence: AtomicU64::new(1),
        }
    }

    pub fn engine(&self) -> &LeadScoringEngine {
        &self.engine
    }

    fn next_prospect_id(&self) -> ProspectId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        ProspectId::from_sequence(id)
    }

    /// Score a new prospect and store it.
    pub fn register(&self, profile: ProspectProfile) -> Result<ProspectRecord, LeadServiceError> {
        let score = self.engine.score(&profile);
        let record = ProspectRecord {
            id: self.next_prospect_id(),
            profile,
            score,
            scored_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            prospect_id = %stored.id,
            total = stored.score.total,
            label = stored.score.label.label(),
            "prospect registered"
        );
        Ok(stored)
    }

    /// Recompute the score of a stored prospect with the current policy.
    pub fn rescore(&self, id: &ProspectId) -> Result<ProspectRecord, LeadServiceError> {
        let mut record = self.get(id)?;
        let previous = record.score.total;

        record.score = self.engine.score(&record.profile);
        record.scored_at = Utc::now();
        self.repository.update(record.clone())?;

        info!(
            prospect_id = %record.id,
            previous,
            total = record.score.total,
            "prospect rescored"
        );
        Ok(record)
    }

    pub fn get(&self, id: &ProspectId) -> Result<ProspectRecord, LeadServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Stored prospects, highest score first; equal scores keep registration order.
    pub fn ranked(&self, limit: usize) -> Result<Vec<ProspectRecord>, LeadServiceError> {
        let mut records = self.repository.list()?;
        records.sort_by(|a, b| {
            b.score
                .total
                .cmp(&a.score.total)
                .then_with(|| a.id.sequence().cmp(&b.id.sequence()))
                .then_with(|| a.id.cmp(&b.id))
        });
        records.truncate(limit);
        Ok(records)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl LeadServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Self::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            Self::Repository(RepositoryError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
