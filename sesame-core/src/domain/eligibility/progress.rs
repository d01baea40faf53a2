// sesame-core/src/domain/eligibility/progress.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::domain::catalog::Course;

// --- SUBJECT SNAPSHOT ---
// Normalized, read-only view of a subject's history at evaluation time.
// Produced by the Progress Store Adapter; the evaluator never writes it.

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SubjectSnapshot {
    #[serde(default)]
    pub completions: Vec<CompletedCourse>,
    #[serde(default)]
    pub certifications: Vec<HeldCertification>,
    #[serde(default)]
    pub grants: HashMap<String, AdminGrant>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompletedCourse {
    pub course_id: String,
    pub completed_at: Option<DateTime<Utc>>,

    // Item ids the subject has actually finished. The "all items done"
    // boolean is deliberately NOT stored: it must be recomputed against the
    // course definition current at evaluation time (courses gain items).
    #[serde(default)]
    pub completed_items: BTreeSet<String>,
}

impl CompletedCourse {
    /// True iff every item of the course, as currently defined, appears in
    /// the subject's completed-item set. A course with no items counts as
    /// covered by its mere completion record.
    pub fn covers(&self, course: &Course) -> bool {
        course
            .items
            .iter()
            .all(|item| self.completed_items.contains(item))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HeldCertification {
    pub certification_id: String,
    pub obtained_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdminGrant {
    pub granted_at: Option<DateTime<Utc>>,
    pub granted_by: Option<String>,
}

impl SubjectSnapshot {
    pub fn completion_for(&self, course_id: &str) -> Option<&CompletedCourse> {
        self.completions.iter().find(|c| c.course_id == course_id)
    }

    pub fn holds_certification(&self, certification_id: &str) -> bool {
        self.certifications
            .iter()
            .any(|c| c.certification_id == certification_id)
    }

    pub fn has_grant_for(&self, resource_id: &str) -> bool {
        self.grants.contains_key(resource_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn completion(course_id: &str, items: &[&str]) -> CompletedCourse {
        CompletedCourse {
            course_id: course_id.into(),
            completed_at: Some(Utc::now()),
            completed_items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_covers_current_definition() {
        let record = completion("c1", &["i1", "i2", "i3", "i4", "i5"]);
        let course_then = Course {
            id: "c1".into(),
            title: "Course".into(),
            items: (1..=5).map(|i| format!("i{i}")).collect(),
        };
        assert!(record.covers(&course_then));

        // The course gained a 6th item after the subject "finished" it.
        let course_now = Course {
            id: "c1".into(),
            title: "Course".into(),
            items: (1..=6).map(|i| format!("i{i}")).collect(),
        };
        assert!(!record.covers(&course_now));
    }

    #[test]
    fn test_covers_itemless_course() {
        let record = completion("c1", &[]);
        let course = Course { id: "c1".into(), title: "Course".into(), items: vec![] };
        assert!(record.covers(&course));
    }

    #[test]
    fn test_snapshot_lookups() {
        let mut snapshot = SubjectSnapshot::default();
        snapshot.completions.push(completion("c1", &["i1"]));
        snapshot.certifications.push(HeldCertification {
            certification_id: "k1".into(),
            obtained_at: None,
        });
        snapshot
            .grants
            .insert("tool-1".into(), AdminGrant { granted_at: None, granted_by: None });

        assert!(snapshot.completion_for("c1").is_some());
        assert!(snapshot.completion_for("c2").is_none());
        assert!(snapshot.holds_certification("k1"));
        assert!(!snapshot.holds_certification("k2"));
        assert!(snapshot.has_grant_for("tool-1"));
        assert!(!snapshot.has_grant_for("tool-2"));
    }
}
