// sesame-core/src/application/gating.rs

use std::sync::Arc;
use tracing::{debug, instrument};

use crate::application::evaluate::evaluate;
use crate::domain::eligibility::EvaluationResult;
use crate::error::SesameError;
use crate::ports::{Catalog, ExamLedger, ProgressStore};

// --- GATING FACADE ---
// Single entry point for the UI layer. Composes the three collaborators:
// progress store (subject state), catalog (resource + requirements + label
// resolution) and exam ledger (latest scores).

pub struct Gatekeeper {
    store: Arc<dyn ProgressStore>,
    catalog: Arc<dyn Catalog>,
    exams: Arc<dyn ExamLedger>,
}

impl Gatekeeper {
    pub fn new(
        store: Arc<dyn ProgressStore>,
        catalog: Arc<dyn Catalog>,
        exams: Arc<dyn ExamLedger>,
    ) -> Self {
        Self { store, catalog, exams }
    }

    /// Decides whether `subject_id` may access `resource_id`.
    ///
    /// Missing subject/resource propagate as errors: the UI must be able to
    /// distinguish "unknown user/resource" from "doesn't qualify yet".
    /// Per-requirement failures never abort the check; they surface as
    /// unmet reasons inside the result.
    #[instrument(skip(self))]
    pub async fn can_access(
        &self,
        subject_id: &str,
        resource_id: &str,
    ) -> Result<EvaluationResult, SesameError> {
        if subject_id.trim().is_empty() {
            return Err(SesameError::InternalError("subject_id cannot be empty".into()));
        }

        // Two independent reads; fetched concurrently.
        let (resource, snapshot) = futures::join!(
            self.catalog.get_resource(resource_id),
            self.store.load_snapshot(subject_id),
        );

        let resource = resource?
            .ok_or_else(|| SesameError::ResourceNotFound(resource_id.to_string()))?;
        let snapshot = snapshot?
            .ok_or_else(|| SesameError::SubjectNotFound(subject_id.to_string()))?;

        debug!(
            "🔐 Gating check: subject '{}' -> resource '{}' ({} requirement(s))",
            subject_id,
            resource_id,
            resource.requirements.len()
        );

        evaluate(&resource, &snapshot, subject_id, self.catalog.as_ref(), self.exams.as_ref())
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::evaluate::tests::{MockCatalog, MockExams, course, full_completion};
    use crate::domain::eligibility::{Lifecycle, Requirement, Resource, SubjectSnapshot};
    use async_trait::async_trait;
    use std::collections::HashMap;

    // --- MOCK PROGRESS STORE ---
    #[derive(Default)]
    struct MockStore {
        snapshots: HashMap<String, SubjectSnapshot>,
    }

    #[async_trait]
    impl ProgressStore for MockStore {
        async fn load_snapshot(
            &self,
            subject_id: &str,
        ) -> Result<Option<SubjectSnapshot>, SesameError> {
            Ok(self.snapshots.get(subject_id).cloned())
        }
    }

    fn gatekeeper(
        store: MockStore,
        catalog: MockCatalog,
        exams: MockExams,
    ) -> Gatekeeper {
        Gatekeeper::new(Arc::new(store), Arc::new(catalog), Arc::new(exams))
    }

    #[tokio::test]
    async fn test_unknown_subject_is_an_error_not_a_denial() {
        // Scenario D.
        let catalog = MockCatalog {
            resources: vec![Resource {
                id: "r1".into(),
                name: "Tool".into(),
                status: Lifecycle::Active,
                requirements: vec![],
            }],
            ..Default::default()
        };
        let gk = gatekeeper(MockStore::default(), catalog, MockExams::default());

        let err = gk.can_access("ghost", "r1").await.unwrap_err();
        assert!(matches!(err, SesameError::SubjectNotFound(id) if id == "ghost"));
    }

    #[tokio::test]
    async fn test_unknown_resource_is_an_error() {
        let store = MockStore {
            snapshots: HashMap::from([("u1".to_string(), SubjectSnapshot::default())]),
        };
        let gk = gatekeeper(store, MockCatalog::default(), MockExams::default());

        let err = gk.can_access("u1", "nope").await.unwrap_err();
        assert!(matches!(err, SesameError::ResourceNotFound(id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_subject_with_empty_progress_is_denied_with_reasons() {
        // Subject exists (empty snapshot) -> a denial with explanations,
        // NOT SubjectNotFound.
        let catalog = MockCatalog {
            resources: vec![Resource {
                id: "r1".into(),
                name: "Tool".into(),
                status: Lifecycle::Active,
                requirements: vec![Requirement::AdminGranted { label: "Ask support".into() }],
            }],
            ..Default::default()
        };
        let store = MockStore {
            snapshots: HashMap::from([("u1".to_string(), SubjectSnapshot::default())]),
        };
        let gk = gatekeeper(store, catalog, MockExams::default());

        let result = gk.can_access("u1", "r1").await.unwrap();
        assert!(!result.allowed);
        assert_eq!(result.unmet_reasons, vec!["Ask support".to_string()]);
    }

    #[tokio::test]
    async fn test_idempotent_over_unchanged_data() {
        let c1 = course("c1", "Course One", 2);
        let catalog = MockCatalog {
            resources: vec![Resource {
                id: "r1".into(),
                name: "Tool".into(),
                status: Lifecycle::Active,
                requirements: vec![Requirement::CourseCompleted {
                    course_id: Some("c1".into()),
                    label: "Course One".into(),
                }],
            }],
            courses: vec![c1.clone()],
            ..Default::default()
        };
        let snapshot = SubjectSnapshot {
            completions: vec![full_completion(&c1)],
            ..Default::default()
        };
        let store = MockStore { snapshots: HashMap::from([("u1".to_string(), snapshot)]) };
        let gk = gatekeeper(store, catalog, MockExams::default());

        let first = gk.can_access("u1", "r1").await.unwrap();
        let second = gk.can_access("u1", "r1").await.unwrap();
        assert_eq!(first, second);
        assert!(first.allowed);
    }

    #[tokio::test]
    async fn test_empty_subject_id_rejected() {
        let gk = gatekeeper(MockStore::default(), MockCatalog::default(), MockExams::default());
        assert!(gk.can_access("  ", "r1").await.is_err());
    }
}
