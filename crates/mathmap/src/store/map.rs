//! The user-facing map over the embedded symbol and function tables.

use crate::store::error::{LoadError, compute_suggestions};
use crate::store::registry::MappingRegistry;
use crate::tables;
use crate::types::{DynamicConstraint, MappingEntry, SpokenDescription};

/// Combined symbol and function map with constraint-keyed lookup.
///
/// Owns a [`MappingRegistry`] filled from the embedded tables (or from
/// caller-supplied entry lists) plus the scanned domain and style
/// universe. Built once, read-only afterwards.
///
/// # Example
///
/// ```
/// use mathmap::MathMap;
///
/// let map = MathMap::new().unwrap();
///
/// let desc = map.evaluate("0028", "default", "alternative");
/// assert_eq!(desc.text, "opening parenthesis");
///
/// // Unmapped input is echoed unchanged.
/// let desc = map.evaluate("xyz123", "default", "default");
/// assert_eq!(desc.text, "xyz123");
/// ```
#[derive(Debug)]
pub struct MathMap {
    store: MappingRegistry,
    domains: Vec<String>,
    styles: Vec<String>,
}

impl MathMap {
    /// Build a map from the embedded symbol and function tables.
    pub fn new() -> Result<Self, LoadError> {
        Self::from_entries(tables::symbol_mappings()?, tables::function_mappings()?)
    }

    /// Build a map from caller-supplied entry lists.
    pub fn from_entries(
        symbols: Vec<MappingEntry>,
        functions: Vec<MappingEntry>,
    ) -> Result<Self, LoadError> {
        let mut store = MappingRegistry::new();
        store.register_symbols(symbols)?;
        store.register_functions(functions)?;

        let values = store.constraint_values();
        Ok(Self {
            store,
            domains: values.domains.into_iter().collect(),
            styles: values.styles.into_iter().collect(),
        })
    }

    /// Domain names present across all registered phrasebooks, sorted.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Style names present across all registered phrasebooks, sorted.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// The underlying registry (read-only).
    pub fn store(&self) -> &MappingRegistry {
        &self.store
    }

    /// Resolve a key under a constraint, or `None` if no entry matches.
    pub fn resolve(&self, key: &str, cstr: &DynamicConstraint) -> Option<&str> {
        self.store.lookup(key, cstr)
    }

    /// Process an input token into a spoken description.
    ///
    /// Resolves `text` as a symbol codepoint or function token under the
    /// given domain and style. When no mapping exists the input is echoed
    /// unchanged: an unmapped symbol is still better spoken as its raw
    /// text than as an error or silence. Never fails.
    pub fn evaluate(&self, text: &str, domain: &str, style: &str) -> SpokenDescription {
        let cstr = DynamicConstraint::new(domain, style);
        let spoken = self.resolve(text, &cstr).unwrap_or(text);
        SpokenDescription::builder().text(spoken).build()
    }

    /// Suggest up to three registered keys similar to `key`.
    pub fn suggestions(&self, key: &str) -> Vec<String> {
        compute_suggestions(key, &self.store.known_keys())
    }
}
