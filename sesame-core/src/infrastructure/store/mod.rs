// sesame-core/src/infrastructure/store/mod.rs

pub mod document;
pub mod shape;

pub use document::{DocumentBackend, DocumentProgressStore, PROGRESS_COLLECTION};
pub use shape::{ExamAttempt, NormalizedProgress, normalize_document};
