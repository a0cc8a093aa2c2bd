//! Error and warning types for table loading and registration.

use thiserror::Error;

/// An error that occurred while loading or registering mapping entries.
///
/// All variants indicate defects in the table data itself; well-formed
/// tables never produce them. Unknown lookup keys, domains, and styles are
/// not errors; see [`MappingRegistry::lookup`](crate::MappingRegistry::lookup).
#[derive(Debug, Error)]
pub enum LoadError {
    /// An embedded table failed to deserialize.
    #[error("failed to parse embedded {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An entry was registered with an empty key.
    #[error("entry in category '{category}' has an empty key")]
    EmptyKey { category: String },

    /// An entry's phrasebook lacks the required default-domain,
    /// default-style phrase.
    #[error("entry '{key}' has no default phrase")]
    MissingDefaultPhrase { key: String },
}

/// A non-fatal finding from the table lint pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// The same key appears more than once within one entry list; under
    /// last-write-wins registration the later entry replaces the earlier.
    #[error("duplicate key '{key}' in {table} table")]
    DuplicateKey { key: String, table: String },

    /// An alternate name is claimed by two entries with different primary
    /// keys; the later registration wins.
    #[error("name '{name}' maps to both '{existing}' and '{key}'")]
    NameCollision {
        name: String,
        existing: String,
        key: String,
    },
}

/// Suggests up to three known keys similar to `input`.
///
/// Uses Levenshtein distance with a threshold of 1 for inputs of three
/// characters or fewer, 2 otherwise. Results are ordered closest first,
/// ties broken alphabetically.
pub fn compute_suggestions(input: &str, available: &[String]) -> Vec<String> {
    let max_distance = if input.chars().count() <= 3 { 1 } else { 2 };

    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let distance = strsim::levenshtein(input, candidate);
            (distance > 0 && distance <= max_distance).then_some((distance, candidate))
        })
        .collect();

    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
