// sesame-core/src/domain/eligibility/decision.rs

use serde::{Deserialize, Serialize};

// --- EVALUATION RESULT ---
// What the UI renders. A denial always carries at least one reason;
// reasons follow requirement declaration order.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvaluationResult {
    pub allowed: bool,
    pub unmet_reasons: Vec<String>,
}

impl EvaluationResult {
    pub fn allowed() -> Self {
        Self { allowed: true, unmet_reasons: vec![] }
    }

    pub fn denied(unmet_reasons: Vec<String>) -> Self {
        Self { allowed: false, unmet_reasons }
    }

    /// Synthetic denial for a resource whose lifecycle is not active.
    /// No point enumerating requirements for something nobody can access.
    pub fn not_yet_available() -> Self {
        Self::denied(vec![reason::NOT_YET_AVAILABLE.to_string()])
    }
}

// --- REASON PHRASING ---
// Centralized so the UI and the tests agree on the exact strings.

pub mod reason {
    pub const NOT_YET_AVAILABLE: &str = "not yet available";

    pub fn complete_course(title: &str) -> String {
        format!("Complete the course \"{title}\"")
    }

    pub fn obtain_certification(title: &str) -> String {
        format!("Obtain the certification \"{title}\"")
    }

    pub fn pass_exam(min_score_percent: u8) -> String {
        format!("Pass the exam with a score of at least {min_score_percent}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_yet_available_is_single_reason() {
        let result = EvaluationResult::not_yet_available();
        assert!(!result.allowed);
        assert_eq!(result.unmet_reasons, vec!["not yet available".to_string()]);
    }

    #[test]
    fn test_reason_phrasing() {
        assert_eq!(
            reason::complete_course("Intro to X"),
            "Complete the course \"Intro to X\""
        );
        assert_eq!(
            reason::obtain_certification("Level 1"),
            "Obtain the certification \"Level 1\""
        );
        assert_eq!(
            reason::pass_exam(70),
            "Pass the exam with a score of at least 70%"
        );
    }
}
