// sesame-core/src/domain/eligibility/mod.rs

pub mod decision;
pub mod progress;
pub mod requirement;
pub mod resolver;

// Re-exports
pub use decision::{EvaluationResult, reason};
pub use progress::{AdminGrant, CompletedCourse, HeldCertification, SubjectSnapshot};
pub use requirement::{Lifecycle, Requirement, Resource};
pub use resolver::{Resolution, resolve_among};
