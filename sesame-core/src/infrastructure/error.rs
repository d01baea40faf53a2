// sesame-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DOCUMENT STORE ---
    #[error("Document Store Error: {0}")]
    #[diagnostic(
        code(sesame::infra::store),
        help("The backing store is unreachable or returned a malformed response.")
    )]
    Store(String),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(sesame::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- EXPORTS / FIXTURES ---
    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(
        code(sesame::infra::json),
        help("The document is not valid JSON.")
    )]
    JsonError(#[from] serde_json::Error),

    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(sesame::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Data export not found at '{0}'")]
    #[diagnostic(code(sesame::infra::export_missing))]
    ExportNotFound(String),
}
