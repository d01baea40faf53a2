// sesame-core/src/infrastructure/mod.rs

pub mod error;
pub mod memory;
pub mod store;
