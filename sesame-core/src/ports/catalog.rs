// sesame-core/src/ports/catalog.rs

// This file defines what the evaluator needs from the resource catalog,
// without knowing where the catalog lives (document store, cache, fixture).

use crate::domain::catalog::{Certification, Course};
use crate::domain::eligibility::Resource;
use crate::error::SesameError;
use async_trait::async_trait;

#[async_trait]
pub trait Catalog: Send + Sync {
    async fn get_resource(&self, id: &str) -> Result<Option<Resource>, SesameError>;

    async fn get_course(&self, id: &str) -> Result<Option<Course>, SesameError>;

    async fn get_certification(&self, id: &str) -> Result<Option<Certification>, SesameError>;

    // Exact-title scans, used only by the resolver's legacy-label path.
    // Case-sensitive by contract; implementations must not fuzzy-match.
    async fn courses_titled(&self, title: &str) -> Result<Vec<Course>, SesameError>;

    async fn certifications_titled(&self, title: &str)
        -> Result<Vec<Certification>, SesameError>;
}
