// sesame-core/src/infrastructure/memory.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

// Imports Hexagonaux
use crate::domain::catalog::{Certification, Course};
use crate::domain::eligibility::Resource;
use crate::error::SesameError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::store::{DocumentBackend, PROGRESS_COLLECTION};
use crate::ports::Catalog;

// --- IN-MEMORY CATALOG ---
// Backs tests and the CLI. Title scans stay case-sensitive exact matches,
// per the Catalog port contract.

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    pub resources: Vec<Resource>,
    pub courses: Vec<Course>,
    pub certifications: Vec<Certification>,
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn get_resource(&self, id: &str) -> Result<Option<Resource>, SesameError> {
        Ok(self.resources.iter().find(|r| r.id == id).cloned())
    }

    async fn get_course(&self, id: &str) -> Result<Option<Course>, SesameError> {
        Ok(self.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn get_certification(&self, id: &str) -> Result<Option<Certification>, SesameError> {
        Ok(self.certifications.iter().find(|c| c.id == id).cloned())
    }

    async fn courses_titled(&self, title: &str) -> Result<Vec<Course>, SesameError> {
        Ok(self
            .courses
            .iter()
            .filter(|c| c.title == title)
            .cloned()
            .collect())
    }

    async fn certifications_titled(
        &self,
        title: &str,
    ) -> Result<Vec<Certification>, SesameError> {
        Ok(self
            .certifications
            .iter()
            .filter(|c| c.title == title)
            .cloned()
            .collect())
    }
}

// --- IN-MEMORY DOCUMENT BACKEND ---

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    // collection -> key -> raw document
    collections: HashMap<String, HashMap<String, Value>>,
}

impl MemoryBackend {
    pub fn with_progress(documents: HashMap<String, Value>) -> Self {
        Self {
            collections: HashMap::from([(PROGRESS_COLLECTION.to_string(), documents)]),
        }
    }
}

#[async_trait]
impl DocumentBackend for MemoryBackend {
    async fn fetch(&self, collection: &str, key: &str) -> Result<Option<Value>, SesameError> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned())
    }
}

// --- DATA EXPORT ---
// Serialized dump of catalog + raw subject documents, as produced by the
// admin console's export job. Loaded by the CLI and by integration tests.

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DataExport {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    // Raw progress documents, intentionally untyped: exports carry the same
    // shape drift as the live store.
    #[serde(default)]
    pub subjects: HashMap<String, Value>,
}

impl DataExport {
    /// Loads a YAML or JSON export, picked by file extension (YAML default).
    pub fn load(path: &Path) -> Result<Self, InfrastructureError> {
        if !path.exists() {
            return Err(InfrastructureError::ExportNotFound(
                path.to_string_lossy().to_string(),
            ));
        }
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Ok(serde_yaml::from_str(&content)?),
        }
    }

    pub fn catalog(&self) -> InMemoryCatalog {
        InMemoryCatalog {
            resources: self.resources.clone(),
            courses: self.courses.clone(),
            certifications: self.certifications.clone(),
        }
    }

    pub fn backend(&self) -> MemoryBackend {
        MemoryBackend::with_progress(self.subjects.clone())
    }
}
