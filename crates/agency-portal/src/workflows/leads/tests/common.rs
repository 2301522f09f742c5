use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::leads::domain::{ProspectId, ProspectProfile, WebsiteQuality};
use crate::workflows::leads::repository::{ProspectRecord, ProspectRepository, RepositoryError};
use crate::workflows::leads::scoring::{LeadScoringConfig, LeadScoringEngine};
use crate::workflows::leads::{lead_router, LeadScoringService};

/// Poor website, solid revenue, dental practice inside the Austin metro. Scores 86.
pub(super) fn hot_profile() -> ProspectProfile {
    ProspectProfile {
        business_name: Some("Barton Creek Family Dentistry".to_string()),
        has_website: Some(true),
        website_quality: Some(WebsiteQuality::Poor),
        annual_revenue: Some(750_000.0),
        category: Some("Family Dentist".to_string()),
        city: Some("Austin".to_string()),
        state: Some("TX".to_string()),
        employee_count: Some(12),
    }
}

/// Polished website, small revenue, out-of-region software shop. Scores 20.
pub(super) fn cold_profile() -> ProspectProfile {
    ProspectProfile {
        business_name: Some("Rosewood Labs".to_string()),
        has_website: Some(true),
        website_quality: Some(WebsiteQuality::Excellent),
        annual_revenue: Some(40_000.0),
        category: Some("Software Consultancy".to_string()),
        city: Some("Portland".to_string()),
        state: Some("OR".to_string()),
        employee_count: Some(0),
    }
}

/// Every attribute at its ceiling. Scores 100.
pub(super) fn perfect_profile() -> ProspectProfile {
    ProspectProfile {
        business_name: Some("South Congress Tacos".to_string()),
        has_website: Some(false),
        website_quality: None,
        annual_revenue: Some(2_400_000.0),
        category: Some("Restaurant".to_string()),
        city: Some("round rock".to_string()),
        state: Some("tx".to_string()),
        employee_count: Some(85),
    }
}

pub(super) fn engine() -> LeadScoringEngine {
    LeadScoringEngine::new(LeadScoringConfig::standard())
}

pub(super) fn build_service() -> (LeadScoringService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = LeadScoringService::new(repository.clone(), LeadScoringConfig::standard());
    (service, repository)
}

pub(super) fn lead_router_with_service(
    service: LeadScoringService<MemoryRepository>,
) -> axum::Router {
    lead_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<BTreeMap<ProspectId, ProspectRecord>>>,
}

impl ProspectRepository for MemoryRepository {
    fn insert(&self, record: ProspectRecord) -> Result<ProspectRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProspectRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ProspectId) -> Result<Option<ProspectRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<ProspectRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) struct ConflictRepository;

impl ProspectRepository for ConflictRepository {
    fn insert(&self, _record: ProspectRecord) -> Result<ProspectRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: ProspectRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &ProspectId) -> Result<Option<ProspectRecord>, RepositoryError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<ProspectRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ProspectRepository for UnavailableRepository {
    fn insert(&self, _record: ProspectRecord) -> Result<ProspectRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ProspectRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ProspectId) -> Result<Option<ProspectRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ProspectRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
