// sesame-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SesameError {
    // --- ERREURS DU DOMAINE (Règles métier, Requirements invalides) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, Parsing, Store) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- LOOKUPS (propagated to the caller, never downgraded to a denial) ---
    #[error("Subject '{0}' not found")]
    SubjectNotFound(String),

    #[error("Resource '{0}' not found")]
    ResourceNotFound(String),

    // --- ERREURS GÉNÉRIQUES / APPLICATIVES ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for SesameError {
    fn from(err: std::io::Error) -> Self {
        SesameError::Infrastructure(InfrastructureError::Io(err))
    }
}
