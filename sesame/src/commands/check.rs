// sesame/src/commands/check.rs
//
// USE CASE: Decide whether a subject may access a gated resource, against
// a data export. Exit codes: 0 allowed, 2 denied (scriptable in CI),
// 1 unknown subject/resource or I/O failure.

use comfy_table::{Cell, Table};
use std::path::Path;
use std::sync::Arc;

use sesame_core::SesameError;
use sesame_core::application::Gatekeeper;
use sesame_core::infrastructure::memory::DataExport;
use sesame_core::infrastructure::store::DocumentProgressStore;

pub async fn execute(data: &Path, subject: &str, resource: &str) -> anyhow::Result<()> {
    // A. Load the export (Infra)
    let export = DataExport::load(data)?;
    println!(
        "⚙️  Loaded export: {} resource(s), {} course(s), {} certification(s), {} subject(s)",
        export.resources.len(),
        export.courses.len(),
        export.certifications.len(),
        export.subjects.len()
    );

    // B. Wire the adapters. The document store serves both ports: the
    // historical store keeps exam attempts in the progress document.
    let store = Arc::new(DocumentProgressStore::new(export.backend()));
    let gatekeeper = Gatekeeper::new(store.clone(), Arc::new(export.catalog()), store);

    // C. Run the check (Application Layer)
    match gatekeeper.can_access(subject, resource).await {
        Ok(result) if result.allowed => {
            println!("\n✨ ALLOWED: '{}' may access '{}'", subject, resource);
        }
        Ok(result) => {
            println!("\n🚫 DENIED: '{}' may not access '{}' yet", subject, resource);

            let mut table = Table::new();
            table.set_header(vec!["#", "Still missing"]);
            for (i, reason) in result.unmet_reasons.iter().enumerate() {
                table.add_row(vec![Cell::new(i + 1), Cell::new(reason)]);
            }
            println!("{table}");

            std::process::exit(2);
        }
        Err(e @ (SesameError::SubjectNotFound(_) | SesameError::ResourceNotFound(_))) => {
            // Unknown user/resource is NOT a denial; distinct state for the caller.
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("💥 CRITICAL: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
