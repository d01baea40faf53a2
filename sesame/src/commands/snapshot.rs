// sesame/src/commands/snapshot.rs
//
// USE CASE: Dump a subject's normalized progress snapshot. Handy when
// chasing shape drift in exported documents.

use comfy_table::Table;
use std::path::Path;

use sesame_core::infrastructure::memory::DataExport;
use sesame_core::infrastructure::store::DocumentProgressStore;
use sesame_core::ports::ProgressStore;

pub async fn execute(data: &Path, subject: &str) -> anyhow::Result<()> {
    let export = DataExport::load(data)?;
    let store = DocumentProgressStore::new(export.backend());

    let Some(snapshot) = store.load_snapshot(subject).await? else {
        anyhow::bail!("❌ No progress document for subject '{}'", subject);
    };

    println!("\n🔍 Normalized snapshot for '{}'", subject);

    let mut table = Table::new();
    table.set_header(vec!["Kind", "Target", "Detail"]);
    for completion in &snapshot.completions {
        table.add_row(vec![
            "course".to_string(),
            completion.course_id.clone(),
            format!("{} item(s) completed", completion.completed_items.len()),
        ]);
    }
    for certification in &snapshot.certifications {
        table.add_row(vec![
            "certification".to_string(),
            certification.certification_id.clone(),
            certification
                .obtained_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".into()),
        ]);
    }
    for (resource_id, grant) in &snapshot.grants {
        table.add_row(vec![
            "grant".to_string(),
            resource_id.clone(),
            grant.granted_by.clone().unwrap_or_else(|| "-".into()),
        ]);
    }
    println!("{table}");

    Ok(())
}
