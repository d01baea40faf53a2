// sesame-core/src/domain/catalog.rs

use serde::{Deserialize, Serialize};

// --- CATALOG RECORDS ---
// Authoritative course/certification definitions, as authored in the admin
// console. The evaluator reads them through the Catalog port; it never
// caches item lists because courses can gain items after a subject
// partially completes them.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Certification {
    pub id: String,
    pub title: String,
}
