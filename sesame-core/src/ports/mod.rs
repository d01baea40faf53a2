// sesame-core/src/ports/mod.rs

pub mod catalog;
pub mod exams;
pub mod progress;

pub use catalog::Catalog;
pub use exams::ExamLedger;
pub use progress::ProgressStore;
