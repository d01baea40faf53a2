// sesame-core/src/infrastructure/store/shape.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

use crate::domain::eligibility::{AdminGrant, CompletedCourse, HeldCertification, SubjectSnapshot};

// --- SHAPE NORMALIZATION ---
// The backing store has no enforced schema and two shapes coexist for
// historical reasons: each section of a subject's progress document may be
// an ordered LIST of entries, or a MAP keyed by the target id. Both are
// normalized here, and nothing above this file ever sees the raw shapes.
//
// Malformed individual entries are skipped with a warning; a half-broken
// document still yields a usable snapshot (same partial-failure stance as
// the resolver).

/// Everything extracted from one raw progress document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedProgress {
    pub snapshot: SubjectSnapshot,
    pub exam_attempts: Vec<ExamAttempt>,
}

/// One recorded exam attempt, keyed by the resource owning the exam.
/// Kept out of SubjectSnapshot: scores are served through the ExamLedger
/// port, the snapshot stays courses/certifications/grants only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExamAttempt {
    pub resource_id: String,
    pub score_percent: u8,
    #[serde(default)]
    pub attempted_at: Option<DateTime<Utc>>,
}

pub fn normalize_document(subject_id: &str, raw: &Value) -> NormalizedProgress {
    let Some(doc) = raw.as_object() else {
        warn!("📦 Progress document for '{}' is not an object, treating as empty", subject_id);
        return NormalizedProgress::default();
    };

    NormalizedProgress {
        snapshot: SubjectSnapshot {
            completions: normalize_completions(subject_id, doc.get("completions")),
            certifications: normalize_certifications(subject_id, doc.get("certifications")),
            grants: normalize_grants(subject_id, doc.get("grants")),
        },
        exam_attempts: normalize_exams(subject_id, doc.get("exams")),
    }
}

// --- COMPLETIONS ---

#[derive(Deserialize)]
struct ListCompletion {
    course_id: String,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    items: Vec<String>,
}

#[derive(Deserialize)]
struct MapCompletion {
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
    // Map shape marks items as done/not-done flags.
    #[serde(default)]
    items: HashMap<String, bool>,
}

fn normalize_completions(subject_id: &str, section: Option<&Value>) -> Vec<CompletedCourse> {
    let mut out = Vec::new();
    match section {
        None | Some(Value::Null) => {}
        Some(Value::Array(entries)) => {
            for entry in entries {
                match ListCompletion::deserialize(entry) {
                    Ok(c) => out.push(CompletedCourse {
                        course_id: c.course_id,
                        completed_at: c.completed_at,
                        completed_items: c.items.into_iter().collect(),
                    }),
                    Err(e) => warn!("📦 Skipping malformed completion entry for '{}': {}", subject_id, e),
                }
            }
        }
        Some(Value::Object(entries)) => {
            for (course_id, entry) in entries {
                match MapCompletion::deserialize(entry) {
                    Ok(c) => out.push(CompletedCourse {
                        course_id: course_id.clone(),
                        completed_at: c.completed_at,
                        completed_items: c
                            .items
                            .into_iter()
                            .filter_map(|(item, done)| done.then_some(item))
                            .collect::<BTreeSet<_>>(),
                    }),
                    Err(e) => warn!(
                        "📦 Skipping malformed completion entry '{}' for '{}': {}",
                        course_id, subject_id, e
                    ),
                }
            }
        }
        Some(other) => {
            warn!(
                "📦 Unexpected 'completions' shape for '{}' ({}), ignoring section",
                subject_id,
                shape_name(other)
            );
        }
    }
    out
}

// --- CERTIFICATIONS ---

#[derive(Deserialize)]
struct ListCertification {
    certification_id: String,
    #[serde(default)]
    obtained_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct MapCertification {
    #[serde(default)]
    obtained_at: Option<DateTime<Utc>>,
}

fn normalize_certifications(subject_id: &str, section: Option<&Value>) -> Vec<HeldCertification> {
    let mut out = Vec::new();
    match section {
        None | Some(Value::Null) => {}
        Some(Value::Array(entries)) => {
            for entry in entries {
                match ListCertification::deserialize(entry) {
                    Ok(c) => out.push(HeldCertification {
                        certification_id: c.certification_id,
                        obtained_at: c.obtained_at,
                    }),
                    Err(e) => {
                        warn!("📦 Skipping malformed certification entry for '{}': {}", subject_id, e)
                    }
                }
            }
        }
        Some(Value::Object(entries)) => {
            for (certification_id, entry) in entries {
                match MapCertification::deserialize(entry) {
                    Ok(c) => out.push(HeldCertification {
                        certification_id: certification_id.clone(),
                        obtained_at: c.obtained_at,
                    }),
                    Err(e) => warn!(
                        "📦 Skipping malformed certification entry '{}' for '{}': {}",
                        certification_id, subject_id, e
                    ),
                }
            }
        }
        Some(other) => {
            warn!(
                "📦 Unexpected 'certifications' shape for '{}' ({}), ignoring section",
                subject_id,
                shape_name(other)
            );
        }
    }
    out
}

// --- ADMIN GRANTS ---

#[derive(Deserialize)]
struct ListGrant {
    resource_id: String,
    #[serde(default)]
    granted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    granted_by: Option<String>,
}

#[derive(Deserialize)]
struct MapGrant {
    #[serde(default)]
    granted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    granted_by: Option<String>,
}

fn normalize_grants(subject_id: &str, section: Option<&Value>) -> HashMap<String, AdminGrant> {
    let mut out = HashMap::new();
    match section {
        None | Some(Value::Null) => {}
        Some(Value::Array(entries)) => {
            for entry in entries {
                match ListGrant::deserialize(entry) {
                    Ok(g) => {
                        out.insert(
                            g.resource_id,
                            AdminGrant { granted_at: g.granted_at, granted_by: g.granted_by },
                        );
                    }
                    Err(e) => warn!("📦 Skipping malformed grant entry for '{}': {}", subject_id, e),
                }
            }
        }
        Some(Value::Object(entries)) => {
            for (resource_id, entry) in entries {
                match MapGrant::deserialize(entry) {
                    Ok(g) => {
                        out.insert(
                            resource_id.clone(),
                            AdminGrant { granted_at: g.granted_at, granted_by: g.granted_by },
                        );
                    }
                    Err(e) => warn!(
                        "📦 Skipping malformed grant entry '{}' for '{}': {}",
                        resource_id, subject_id, e
                    ),
                }
            }
        }
        Some(other) => {
            warn!(
                "📦 Unexpected 'grants' shape for '{}' ({}), ignoring section",
                subject_id,
                shape_name(other)
            );
        }
    }
    out
}

// --- EXAM ATTEMPTS ---

#[derive(Deserialize)]
struct MapAttempt {
    score_percent: u8,
    #[serde(default)]
    attempted_at: Option<DateTime<Utc>>,
}

fn normalize_exams(subject_id: &str, section: Option<&Value>) -> Vec<ExamAttempt> {
    let mut out = Vec::new();
    match section {
        None | Some(Value::Null) => {}
        Some(Value::Array(entries)) => {
            for entry in entries {
                match ExamAttempt::deserialize(entry) {
                    Ok(a) => out.push(a),
                    Err(e) => warn!("📦 Skipping malformed exam entry for '{}': {}", subject_id, e),
                }
            }
        }
        // Map shape groups attempts per resource id.
        Some(Value::Object(entries)) => {
            for (resource_id, attempts) in entries {
                let Some(attempts) = attempts.as_array() else {
                    warn!(
                        "📦 Skipping malformed exam entry '{}' for '{}': expected a list of attempts",
                        resource_id, subject_id
                    );
                    continue;
                };
                for attempt in attempts {
                    match MapAttempt::deserialize(attempt) {
                        Ok(a) => out.push(ExamAttempt {
                            resource_id: resource_id.clone(),
                            score_percent: a.score_percent,
                            attempted_at: a.attempted_at,
                        }),
                        Err(e) => warn!(
                            "📦 Skipping malformed exam attempt '{}' for '{}': {}",
                            resource_id, subject_id, e
                        ),
                    }
                }
            }
        }
        Some(other) => {
            warn!(
                "📦 Unexpected 'exams' shape for '{}' ({}), ignoring section",
                subject_id,
                shape_name(other)
            );
        }
    }
    out
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
