// sesame-core/src/domain/eligibility/requirement.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::DomainError;

// --- LIFECYCLE ---

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    Draft,
    Active,
    Deprecated,
    Archived,
}

impl Default for Lifecycle {
    fn default() -> Self { Self::Draft }
}

// --- REQUIREMENTS (TAGGED UNION) ---
// One variant per requirement kind. Adding a kind is a compile-time-checked
// extension point: the evaluator matches exhaustively.

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Requirement {
    CourseCompleted {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        course_id: Option<String>,
        label: String,
    },
    ExamPassed {
        #[serde(default = "default_min_score")]
        min_score_percent: u8,
    },
    CertificationHeld {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        certification_id: Option<String>,
        label: String,
    },
    AdminGranted {
        label: String,
    },
}

pub fn default_min_score() -> u8 {
    70
}

impl Requirement {
    /// The human-readable label carried by the requirement.
    /// ExamPassed has no authored label; its phrasing is fully derived
    /// from the threshold.
    pub fn label(&self) -> Option<&str> {
        match self {
            Requirement::CourseCompleted { label, .. } => Some(label),
            Requirement::CertificationHeld { label, .. } => Some(label),
            Requirement::AdminGranted { label } => Some(label),
            Requirement::ExamPassed { .. } => None,
        }
    }

    /// Creation-time check: a requirement with neither id nor label can
    /// never produce a user-facing explanation and is rejected outright.
    pub fn validate_authoring(&self) -> Result<(), DomainError> {
        let invalid = |detail: &str| DomainError::InvalidRequirement {
            resource_id: "<unattached>".into(),
            detail: detail.to_string(),
        };

        match self {
            Requirement::CourseCompleted { course_id, label } => {
                if label.trim().is_empty() && course_id.is_none() {
                    return Err(invalid("course_completed carries neither course_id nor label"));
                }
                if label.trim().is_empty() {
                    return Err(invalid("course_completed label is empty"));
                }
            }
            Requirement::CertificationHeld { certification_id, label } => {
                if label.trim().is_empty() && certification_id.is_none() {
                    return Err(invalid("certification_held carries neither certification_id nor label"));
                }
                if label.trim().is_empty() {
                    return Err(invalid("certification_held label is empty"));
                }
            }
            Requirement::AdminGranted { label } => {
                if label.trim().is_empty() {
                    return Err(invalid("admin_granted label is empty"));
                }
            }
            Requirement::ExamPassed { min_score_percent } => {
                if *min_score_percent > 100 {
                    return Err(DomainError::InvalidThreshold(*min_score_percent));
                }
            }
        }
        Ok(())
    }
}

// --- RESOURCE ---
// A gated entity (tool or certification track). Immutable input to the
// evaluator; authored through the CRUD layer.

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct Resource {
    #[validate(length(min = 1, message = "Resource id cannot be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "Resource name cannot be empty"))]
    pub name: String,

    #[serde(default)]
    pub status: Lifecycle,

    #[validate(custom(function = "validate_requirements"))]
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

fn validate_requirements(requirements: &[Requirement]) -> Result<(), validator::ValidationError> {
    for req in requirements {
        if req.validate_authoring().is_err() {
            let mut err = validator::ValidationError::new("invalid_requirement");
            err.message = Some("requirement carries neither id nor label".into());
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_default_threshold() {
        let json = r#"{ "kind": "exam_passed" }"#;
        let req: Requirement = serde_json::from_str(json).unwrap();
        assert_eq!(req, Requirement::ExamPassed { min_score_percent: 70 });
    }

    #[test]
    fn test_course_requirement_without_id_parses() {
        let json = r#"{ "kind": "course_completed", "label": "Intro to X" }"#;
        let req: Requirement = serde_json::from_str(json).unwrap();
        match req {
            Requirement::CourseCompleted { course_id, label } => {
                assert_eq!(course_id, None);
                assert_eq!(label, "Intro to X");
            }
            _ => panic!("Expected CourseCompleted"),
        }
    }

    #[test]
    fn test_empty_label_rejected_at_authoring() {
        let req = Requirement::CourseCompleted {
            course_id: None,
            label: "   ".into(),
        };
        assert!(req.validate_authoring().is_err());
    }

    #[test]
    fn test_resource_validation_rejects_blank_requirement() {
        let resource = Resource {
            id: "tool-1".into(),
            name: "Pricing Kit".into(),
            status: Lifecycle::Active,
            requirements: vec![Requirement::AdminGranted { label: "".into() }],
        };
        assert!(resource.validate().is_err());
    }

    #[test]
    fn test_resource_validation_accepts_well_formed() {
        let resource = Resource {
            id: "tool-1".into(),
            name: "Pricing Kit".into(),
            status: Lifecycle::Active,
            requirements: vec![
                Requirement::CourseCompleted { course_id: Some("c1".into()), label: "Course 1".into() },
                Requirement::ExamPassed { min_score_percent: 80 },
            ],
        };
        assert!(resource.validate().is_ok());
    }

    #[test]
    fn test_lifecycle_default_is_draft() {
        assert_eq!(Lifecycle::default(), Lifecycle::Draft);
    }
}
