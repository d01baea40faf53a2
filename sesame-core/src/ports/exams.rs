// sesame-core/src/ports/exams.rs

use crate::error::SesameError;
use async_trait::async_trait;

/// External collaborator supplying exam scores. The evaluator only ever
/// needs the most recent attempt for (subject, resource).
#[async_trait]
pub trait ExamLedger: Send + Sync {
    async fn latest_score(
        &self,
        subject_id: &str,
        resource_id: &str,
    ) -> Result<Option<u8>, SesameError>;
}
