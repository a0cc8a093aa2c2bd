//! Static lint rules for mapping entry lists.
//!
//! Operates on the raw entry lists before registration, surfacing data
//! defects that last-write-wins registration would otherwise mask.

use std::collections::HashMap;

use crate::store::error::LoadWarning;
use crate::types::MappingEntry;

/// Runs the static lint rules over both entry lists, returning warnings.
///
/// Detects duplicate keys within each list and alternate names claimed by
/// two entries with different primary keys. Malformed phrasebooks (missing
/// default phrase, empty key) are not linted here; registration rejects
/// those outright.
pub fn lint_entries(symbols: &[MappingEntry], functions: &[MappingEntry]) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();
    lint_duplicate_keys(symbols, "symbol", &mut warnings);
    lint_duplicate_keys(functions, "function", &mut warnings);
    lint_name_collisions(functions, &mut warnings);
    warnings
}

/// Flags keys appearing more than once within a single entry list.
fn lint_duplicate_keys(entries: &[MappingEntry], table: &str, warnings: &mut Vec<LoadWarning>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *seen.entry(entry.key.as_str()).or_default() += 1;
    }
    let mut duplicates: Vec<&str> = seen
        .into_iter()
        .filter_map(|(key, count)| (count > 1).then_some(key))
        .collect();
    duplicates.sort_unstable();
    for key in duplicates {
        warnings.push(LoadWarning::DuplicateKey {
            key: key.to_string(),
            table: table.to_string(),
        });
    }
}

/// Flags alternate names that resolve to two different primary keys.
fn lint_name_collisions(functions: &[MappingEntry], warnings: &mut Vec<LoadWarning>) {
    let mut claimed: HashMap<&str, &str> = HashMap::new();
    for entry in functions {
        for name in &entry.names {
            let existing = claimed.get(name.as_str()).copied();
            match existing {
                Some(existing) if existing != entry.key => {
                    warnings.push(LoadWarning::NameCollision {
                        name: name.clone(),
                        existing: existing.to_string(),
                        key: entry.key.clone(),
                    });
                }
                _ => {
                    claimed.insert(name.as_str(), entry.key.as_str());
                }
            }
        }
    }
}
