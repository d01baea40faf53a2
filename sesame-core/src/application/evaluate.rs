// sesame-core/src/application/evaluate.rs

use futures::future::join_all;
use tracing::{debug, instrument};

// Imports Hexagonaux
use crate::domain::eligibility::{
    EvaluationResult, Lifecycle, Requirement, Resolution, Resource, SubjectSnapshot, reason,
    resolve_among,
};
use crate::error::SesameError;
use crate::ports::{Catalog, ExamLedger};

// --- REQUIREMENT EVALUATOR ---
// Policy core: purely a function of (resource, snapshot) plus the catalog
// consulted for label resolution and current course definitions.
//
// Two propagation regimes (see error taxonomy):
//   - store/catalog I/O failure  -> terminal error for the call (`?`)
//   - unresolvable / unmet       -> an unmet reason, evaluation continues

/// Evaluates every requirement of `resource` against `snapshot`.
/// No short-circuit between requirements: callers must be able to show the
/// user everything still missing, not just the first blocker. Reasons keep
/// declaration order.
#[instrument(skip_all, fields(resource.id = %resource.id, subject.id = %subject_id))]
pub async fn evaluate(
    resource: &Resource,
    snapshot: &SubjectSnapshot,
    subject_id: &str,
    catalog: &dyn Catalog,
    exams: &dyn ExamLedger,
) -> Result<EvaluationResult, SesameError> {
    // Lifecycle first: an inactive resource is denied unconditionally with
    // one synthetic reason, requirements are not even enumerated.
    if resource.status != Lifecycle::Active {
        debug!("⛔ Resource '{}' is not active ({:?})", resource.id, resource.status);
        return Ok(EvaluationResult::not_yet_available());
    }

    // Per-requirement checks are independent reads; issue them concurrently.
    // join_all preserves declaration order in its output.
    let checks = resource
        .requirements
        .iter()
        .map(|req| check_requirement(req, resource, snapshot, subject_id, catalog, exams));

    let mut unmet_reasons = Vec::new();
    for outcome in join_all(checks).await {
        if let Some(reason) = outcome? {
            unmet_reasons.push(reason);
        }
    }

    if unmet_reasons.is_empty() {
        debug!("✅ Subject '{}' satisfies all requirements of '{}'", subject_id, resource.id);
        Ok(EvaluationResult::allowed())
    } else {
        debug!(
            "🚫 Subject '{}' misses {} requirement(s) of '{}'",
            subject_id,
            unmet_reasons.len(),
            resource.id
        );
        Ok(EvaluationResult::denied(unmet_reasons))
    }
}

/// One requirement -> None (satisfied) or Some(unmet reason).
async fn check_requirement(
    requirement: &Requirement,
    resource: &Resource,
    snapshot: &SubjectSnapshot,
    subject_id: &str,
    catalog: &dyn Catalog,
    exams: &dyn ExamLedger,
) -> Result<Option<String>, SesameError> {
    match requirement {
        Requirement::CourseCompleted { course_id, label } => {
            check_course(course_id.as_deref(), label, snapshot, catalog).await
        }
        Requirement::ExamPassed { min_score_percent } => {
            check_exam(*min_score_percent, &resource.id, subject_id, exams).await
        }
        Requirement::CertificationHeld { certification_id, label } => {
            check_certification(certification_id.as_deref(), label, snapshot, catalog).await
        }
        Requirement::AdminGranted { label } => {
            // The one kind whose human-facing text is fully author-controlled.
            if snapshot.has_grant_for(&resource.id) {
                Ok(None)
            } else {
                Ok(Some(label.clone()))
            }
        }
    }
}

async fn check_course(
    course_id: Option<&str>,
    label: &str,
    snapshot: &SubjectSnapshot,
    catalog: &dyn Catalog,
) -> Result<Option<String>, SesameError> {
    // Stable id wins; label resolution is the legacy path only.
    let course = match course_id {
        Some(id) => catalog.get_course(id).await?,
        None => {
            let candidates = catalog.courses_titled(label).await?;
            let ids: Vec<String> = candidates.iter().map(|c| c.id.clone()).collect();
            match resolve_among(label, &ids) {
                Resolution::Resolved(id) => candidates.into_iter().find(|c| c.id == id),
                Resolution::Unresolvable => None,
            }
        }
    };

    // Unresolvable or dangling reference: permanently unmet, phrased with
    // the fallback label so the user still gets an explanation.
    let Some(course) = course else {
        return Ok(Some(reason::complete_course(label)));
    };

    // Recomputed against the CURRENT item list, never a cached flag.
    let satisfied = snapshot
        .completion_for(&course.id)
        .map(|record| record.covers(&course))
        .unwrap_or(false);

    if satisfied {
        Ok(None)
    } else {
        Ok(Some(reason::complete_course(&course.title)))
    }
}

async fn check_certification(
    certification_id: Option<&str>,
    label: &str,
    snapshot: &SubjectSnapshot,
    catalog: &dyn Catalog,
) -> Result<Option<String>, SesameError> {
    let certification = match certification_id {
        Some(id) => catalog.get_certification(id).await?,
        None => {
            let candidates = catalog.certifications_titled(label).await?;
            let ids: Vec<String> = candidates.iter().map(|c| c.id.clone()).collect();
            match resolve_among(label, &ids) {
                Resolution::Resolved(id) => candidates.into_iter().find(|c| c.id == id),
                Resolution::Unresolvable => None,
            }
        }
    };

    let Some(certification) = certification else {
        return Ok(Some(reason::obtain_certification(label)));
    };

    if snapshot.holds_certification(&certification.id) {
        Ok(None)
    } else {
        Ok(Some(reason::obtain_certification(&certification.title)))
    }
}

async fn check_exam(
    min_score_percent: u8,
    resource_id: &str,
    subject_id: &str,
    exams: &dyn ExamLedger,
) -> Result<Option<String>, SesameError> {
    let satisfied = exams
        .latest_score(subject_id, resource_id)
        .await?
        .map(|score| score >= min_score_percent)
        .unwrap_or(false);

    if satisfied {
        Ok(None)
    } else {
        Ok(Some(reason::pass_exam(min_score_percent)))
    }
}
