// sesame-core/src/ports/progress.rs

use crate::domain::eligibility::SubjectSnapshot;
use crate::error::SesameError;
use async_trait::async_trait;

#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Ok(None) means the subject has no stored document at all; the facade
    /// maps that to SubjectNotFound. A subject that exists but has no
    /// progress yet yields Ok(Some(empty snapshot)). Pure read.
    async fn load_snapshot(&self, subject_id: &str)
        -> Result<Option<SubjectSnapshot>, SesameError>;
}
