use agency_portal::workflows::leads::{
    ProspectId, ProspectRecord, ProspectRepository, RepositoryError, WebsiteQuality,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local prospect store; contents are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProspectRepository {
    records: Arc<Mutex<BTreeMap<ProspectId, ProspectRecord>>>,
}

impl InMemoryProspectRepository {
    fn records(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<ProspectId, ProspectRecord>>, RepositoryError>
    {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("prospect store poisoned".to_string()))
    }
}

impl ProspectRepository for InMemoryProspectRepository {
    fn insert(&self, record: ProspectRecord) -> Result<ProspectRecord, RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProspectRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records()?;
        match guard.get_mut(&record.id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &ProspectId) -> Result<Option<ProspectRecord>, RepositoryError> {
        Ok(self.records()?.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<ProspectRecord>, RepositoryError> {
        Ok(self.records()?.values().cloned().collect())
    }
}

pub(crate) fn parse_website_quality(raw: &str) -> Result<WebsiteQuality, String> {
    raw.parse::<WebsiteQuality>()
        .map_err(|err| format!("{err} (expected poor, fair, good or excellent)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_portal::workflows::leads::{calculate_lead_score_detailed, ProspectProfile};
    use chrono::Utc;

    fn record(id: &str) -> ProspectRecord {
        let profile = ProspectProfile::default();
        ProspectRecord {
            id: ProspectId(id.to_string()),
            score: calculate_lead_score_detailed(&profile),
            profile,
            scored_at: Utc::now(),
        }
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let repository = InMemoryProspectRepository::default();
        repository.insert(record("prospect-000001")).expect("first insert");

        let err = repository
            .insert(record("prospect-000001"))
            .expect_err("duplicate rejected");
        assert!(matches!(err, RepositoryError::Conflict));
    }

    #[test]
    fn update_requires_existing_record() {
        let repository = InMemoryProspectRepository::default();

        let err = repository
            .update(record("prospect-000002"))
            .expect_err("missing record");
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn website_quality_argument_is_case_insensitive() {
        assert_eq!(parse_website_quality("Fair"), Ok(WebsiteQuality::Fair));
        assert!(parse_website_quality("shiny")
            .expect_err("unknown tier")
            .contains("expected poor"));
    }
}
