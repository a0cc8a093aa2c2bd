//! Constraint-keyed store for symbol and function mapping entries.

use std::collections::{BTreeSet, HashMap};

use crate::store::error::LoadError;
use crate::types::{DynamicConstraint, MappingEntry};

/// The distinct domain and style names present across a store's registered
/// phrasebooks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintValues {
    /// Domain names, sorted.
    pub domains: BTreeSet<String>,
    /// Style names, sorted.
    pub styles: BTreeSet<String>,
}

/// A registry holding symbol and function mapping entries in two separate
/// namespaces.
///
/// Symbol entries are indexed by codepoint key; function entries by their
/// primary key and by every alternate name. Lookup consults the function
/// namespace first. In practice function tokens and hex codepoint keys are
/// disjoint lexical classes, but the precedence is fixed either way.
///
/// The registry is filled once at construction time and read-only
/// afterwards; lookups are pure, non-blocking reads.
#[derive(Debug, Default)]
pub struct MappingRegistry {
    /// Symbol entries indexed by codepoint key.
    symbols: HashMap<String, MappingEntry>,
    /// Function entries indexed by primary key.
    functions: HashMap<String, MappingEntry>,
    /// Maps every alternate function name to its entry's primary key.
    function_names: HashMap<String, String>,
}

impl MappingRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register symbol entries under their codepoint keys.
    ///
    /// Each entry is validated: the key must be non-empty and the
    /// phrasebook must contain the default-domain, default-style phrase.
    /// Registering a key twice replaces the earlier entry (last write
    /// wins), so re-registering identical data is harmless.
    ///
    /// Returns the number of entries registered.
    pub fn register_symbols(
        &mut self,
        entries: impl IntoIterator<Item = MappingEntry>,
    ) -> Result<usize, LoadError> {
        let mut count = 0;
        for entry in entries {
            validate(&entry)?;
            self.symbols.insert(entry.key.clone(), entry);
            count += 1;
        }
        Ok(count)
    }

    /// Register function entries under their primary keys and alternate
    /// names.
    ///
    /// Every token in an entry's `names` list is indexed to the same entry
    /// as the primary key, so alias lookup and primary-key lookup return
    /// the same phrasebook. Same validation and last-write-wins semantics
    /// as [`register_symbols`](Self::register_symbols).
    ///
    /// Returns the number of entries registered.
    pub fn register_functions(
        &mut self,
        entries: impl IntoIterator<Item = MappingEntry>,
    ) -> Result<usize, LoadError> {
        let mut count = 0;
        for entry in entries {
            validate(&entry)?;
            for name in &entry.names {
                self.function_names
                    .insert(name.clone(), entry.key.clone());
            }
            self.functions.insert(entry.key.clone(), entry);
            count += 1;
        }
        Ok(count)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Get a symbol entry by codepoint key.
    pub fn symbol(&self, key: &str) -> Option<&MappingEntry> {
        self.symbols.get(key)
    }

    /// Get a function entry by primary key or alternate name.
    pub fn function(&self, token: &str) -> Option<&MappingEntry> {
        if let Some(entry) = self.functions.get(token) {
            return Some(entry);
        }
        let key = self.function_names.get(token)?;
        self.functions.get(key)
    }

    /// Get the entry for a key from either namespace.
    ///
    /// The function namespace is consulted first (exact token, then
    /// alternate name), then the symbol namespace.
    pub fn entry(&self, key: &str) -> Option<&MappingEntry> {
        self.function(key).or_else(|| self.symbol(key))
    }

    /// Resolve a key under a constraint to a phrase.
    ///
    /// Returns `None` when no entry matches the key in either namespace.
    /// Unknown domains and styles are ordinary inputs handled by the
    /// phrasebook fallback chain.
    pub fn lookup(&self, key: &str, cstr: &DynamicConstraint) -> Option<&str> {
        self.entry(key)?.mappings.phrase(cstr)
    }

    // =========================================================================
    // Enumeration
    // =========================================================================

    /// Scan all registered phrasebooks for the distinct domain and style
    /// names.
    pub fn constraint_values(&self) -> ConstraintValues {
        let mut values = ConstraintValues::default();
        for entry in self.symbols.values().chain(self.functions.values()) {
            for (domain, style) in entry.mappings.constraints() {
                values.domains.insert(domain.to_string());
                values.styles.insert(style.to_string());
            }
        }
        values
    }

    /// Every token that resolves to an entry, sorted: function keys,
    /// alternate names, and symbol keys.
    pub fn known_keys(&self) -> Vec<String> {
        let keys: BTreeSet<&str> = self
            .functions
            .keys()
            .chain(self.function_names.keys())
            .chain(self.symbols.keys())
            .map(String::as_str)
            .collect();
        keys.into_iter().map(str::to_string).collect()
    }

    /// Number of registered symbol entries.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of registered function entries (primary keys only).
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

/// Reject entries that violate the table invariants.
fn validate(entry: &MappingEntry) -> Result<(), LoadError> {
    if entry.key.is_empty() {
        return Err(LoadError::EmptyKey {
            category: entry.category.clone(),
        });
    }
    if !entry.mappings.has_default() {
        return Err(LoadError::MissingDefaultPhrase {
            key: entry.key.clone(),
        });
    }
    Ok(())
}
