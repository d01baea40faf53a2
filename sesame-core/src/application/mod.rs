// sesame-core/src/application/mod.rs

pub mod evaluate;
pub mod gating;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use sesame_core::application::{Gatekeeper, evaluate};`
// sans avoir à connaître la structure interne des fichiers.

pub use evaluate::evaluate;
pub use gating::Gatekeeper;
