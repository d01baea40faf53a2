// sesame-core/src/domain/eligibility/resolver.rs

use tracing::debug;

// --- REFERENCE RESOLUTION ---
// Legacy authored requirements may reference a course/certification by
// display label only. Resolution is a case-sensitive exact-title match and
// must be UNIQUE: zero or multiple candidates are Unresolvable, never a
// silent pick. Unresolvable is not an error; the evaluator turns it into an
// unmet reason so one malformed requirement never blocks the others.

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(String),
    Unresolvable,
}

/// This function is PURE: the catalog scan (async, per the Catalog port)
/// happens in the application layer; only the already-fetched candidate ids
/// are judged here.
pub fn resolve_among(label: &str, candidate_ids: &[String]) -> Resolution {
    match candidate_ids {
        [single] => {
            debug!("🔗 Label '{}' resolved to '{}'", label, single);
            Resolution::Resolved(single.clone())
        }
        [] => {
            debug!("🔗 Label '{}' matched no catalog entry", label);
            Resolution::Unresolvable
        }
        many => {
            debug!(
                "🔗 Label '{}' is ambiguous ({} catalog entries)",
                label,
                many.len()
            );
            Resolution::Unresolvable
        }
    }
}
