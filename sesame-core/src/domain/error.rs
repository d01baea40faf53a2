// sesame-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid requirement on resource '{resource_id}': {detail}")]
    #[diagnostic(
        code(sesame::domain::invalid_requirement),
        help("Every requirement must carry a human-readable label (and an id when available).")
    )]
    InvalidRequirement { resource_id: String, detail: String },

    #[error("Invalid exam threshold: {0} (expected 0..=100)")]
    #[diagnostic(code(sesame::domain::exam_threshold))]
    InvalidThreshold(u8),

    #[error("Resource validation failed: {0}")]
    #[diagnostic(code(sesame::domain::resource))]
    ResourceValidation(String),
}
