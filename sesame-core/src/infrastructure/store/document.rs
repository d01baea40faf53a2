// sesame-core/src/infrastructure/store/document.rs

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

// Imports Hexagonaux
use crate::domain::eligibility::SubjectSnapshot;
use crate::error::SesameError;
use crate::infrastructure::store::shape::{ExamAttempt, normalize_document};
use crate::ports::{ExamLedger, ProgressStore};

/// Collection holding one raw progress document per subject.
pub const PROGRESS_COLLECTION: &str = "subject_progress";

// --- RAW DOCUMENT ACCESS ---
// The only thing the adapter asks of the store: keyed JSON documents.
// Ok(None) = no document for that key (distinct from an empty document).

#[async_trait]
pub trait DocumentBackend: Send + Sync {
    async fn fetch(&self, collection: &str, key: &str) -> Result<Option<Value>, SesameError>;
}

// --- PROGRESS STORE ADAPTER ---
// Quarantines the store's schema drift: everything above sees one
// normalized SubjectSnapshot, whatever shape the document arrived in.

pub struct DocumentProgressStore<B: DocumentBackend> {
    backend: B,
}

impl<B: DocumentBackend> DocumentProgressStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    async fn fetch_attempts(&self, subject_id: &str) -> Result<Option<Vec<ExamAttempt>>, SesameError> {
        let raw = self.backend.fetch(PROGRESS_COLLECTION, subject_id).await?;
        Ok(raw.map(|doc| normalize_document(subject_id, &doc).exam_attempts))
    }
}

#[async_trait]
impl<B: DocumentBackend> ProgressStore for DocumentProgressStore<B> {
    async fn load_snapshot(
        &self,
        subject_id: &str,
    ) -> Result<Option<SubjectSnapshot>, SesameError> {
        let Some(raw) = self.backend.fetch(PROGRESS_COLLECTION, subject_id).await? else {
            debug!("📦 No progress document for subject '{}'", subject_id);
            return Ok(None);
        };

        let normalized = normalize_document(subject_id, &raw);
        debug!(
            "📦 Snapshot for '{}': {} completion(s), {} certification(s), {} grant(s)",
            subject_id,
            normalized.snapshot.completions.len(),
            normalized.snapshot.certifications.len(),
            normalized.snapshot.grants.len()
        );
        Ok(Some(normalized.snapshot))
    }
}

// The historical store also holds exam attempts in the same document, so
// the adapter doubles as the ExamLedger collaborator.
#[async_trait]
impl<B: DocumentBackend> ExamLedger for DocumentProgressStore<B> {
    async fn latest_score(
        &self,
        subject_id: &str,
        resource_id: &str,
    ) -> Result<Option<u8>, SesameError> {
        let Some(attempts) = self.fetch_attempts(subject_id).await? else {
            return Ok(None);
        };

        // Latest = max attempted_at; untimestamped attempts rank oldest but
        // keep their position so a document with no timestamps at all still
        // yields its last recorded attempt.
        let latest = attempts
            .iter()
            .enumerate()
            .filter(|(_, a)| a.resource_id == resource_id)
            .max_by_key(|(index, a)| (a.attempted_at, *index))
            .map(|(_, a)| a.score_percent);

        Ok(latest)
    }
}
