//! Integration tests for registration and namespace behavior.

use mathmap::{DynamicConstraint, LoadError, MappingEntry, MappingRegistry, phrasebook};

fn symbol(key: &str, phrase: &str) -> MappingEntry {
    MappingEntry::builder()
        .key(key)
        .category("Sm")
        .mappings(phrasebook! { "default" => { "default" => phrase } })
        .build()
}

fn function(key: &str, names: &[&str], phrase: &str) -> MappingEntry {
    MappingEntry::builder()
        .key(key)
        .category("Elementary")
        .names(names.iter().map(|n| (*n).to_string()).collect())
        .mappings(phrasebook! { "default" => { "default" => phrase } })
        .build()
}

// =========================================================================
// Registration
// =========================================================================

#[test]
fn register_symbols_returns_count() {
    let mut store = MappingRegistry::new();
    let count = store
        .register_symbols(vec![symbol("0021", "exclamation mark"), symbol("002B", "plus")])
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(store.symbol_count(), 2);
}

#[test]
fn register_rejects_missing_default_phrase() {
    let mut store = MappingRegistry::new();
    let entry = MappingEntry::builder()
        .key("0021")
        .category("Po")
        .mappings(phrasebook! { "default" => { "short" => "bang" } })
        .build();

    let result = store.register_symbols(vec![entry]);
    assert!(matches!(
        result.unwrap_err(),
        LoadError::MissingDefaultPhrase { key } if key == "0021"
    ));
}

#[test]
fn register_rejects_empty_key() {
    let mut store = MappingRegistry::new();
    let result = store.register_symbols(vec![symbol("", "nothing")]);

    assert!(matches!(result.unwrap_err(), LoadError::EmptyKey { .. }));
}

#[test]
fn reregistering_same_entries_is_idempotent() {
    let mut store = MappingRegistry::new();
    let cstr = DynamicConstraint::default();

    store.register_symbols(vec![symbol("0021", "exclamation mark")]).unwrap();
    store.register_symbols(vec![symbol("0021", "exclamation mark")]).unwrap();

    assert_eq!(store.symbol_count(), 1);
    assert_eq!(store.lookup("0021", &cstr), Some("exclamation mark"));
}

#[test]
fn conflicting_reregistration_last_write_wins() {
    let mut store = MappingRegistry::new();
    let cstr = DynamicConstraint::default();

    store.register_symbols(vec![symbol("0021", "exclamation mark")]).unwrap();
    store.register_symbols(vec![symbol("0021", "bang")]).unwrap();

    assert_eq!(store.lookup("0021", &cstr), Some("bang"));
}

// =========================================================================
// Alias Resolution
// =========================================================================

#[test]
fn function_names_resolve_to_same_entry() {
    let mut store = MappingRegistry::new();
    store
        .register_functions(vec![function("exp", &["exp", "expt"], "exponential")])
        .unwrap();

    let by_key = store.function("exp").unwrap();
    let by_name = store.function("expt").unwrap();
    assert_eq!(by_key, by_name);
}

#[test]
fn alias_lookup_matches_primary_for_every_constraint() {
    let mut store = MappingRegistry::new();
    let mut entry = function("cos", &["cos", "cosine"], "cosine");
    entry.mappings.insert("default", "short", "cos");
    store.register_functions(vec![entry]).unwrap();

    for (domain, style) in [
        ("default", "default"),
        ("default", "short"),
        ("default", "alternative"),
        ("obscure", "short"),
    ] {
        let cstr = DynamicConstraint::new(domain, style);
        assert_eq!(store.lookup("cosine", &cstr), store.lookup("cos", &cstr));
    }
}

// =========================================================================
// Namespace Precedence
// =========================================================================

#[test]
fn function_namespace_wins_over_symbol_namespace() {
    let mut store = MappingRegistry::new();
    store.register_symbols(vec![symbol("abcd", "as symbol")]).unwrap();
    store.register_functions(vec![function("abcd", &["abcd"], "as function")]).unwrap();

    let cstr = DynamicConstraint::default();
    assert_eq!(store.lookup("abcd", &cstr), Some("as function"));
    // Both entries remain reachable through their own namespace.
    assert_eq!(store.symbol("abcd").unwrap().mappings.phrase(&cstr), Some("as symbol"));
}

#[test]
fn unknown_key_returns_none() {
    let mut store = MappingRegistry::new();
    store.register_symbols(vec![symbol("0021", "exclamation mark")]).unwrap();

    let cstr = DynamicConstraint::default();
    assert_eq!(store.lookup("xyz123", &cstr), None);
    assert!(store.entry("xyz123").is_none());
}

// =========================================================================
// Constraint Enumeration
// =========================================================================

#[test]
fn constraint_values_collects_distinct_domains_and_styles() {
    let mut store = MappingRegistry::new();
    let mut short = symbol("0024", "dollar sign");
    short.mappings.insert("default", "short", "dollar");
    let mut alternative = symbol("0023", "number sign");
    alternative.mappings.insert("default", "alternative", "hash");
    store.register_symbols(vec![short, alternative]).unwrap();

    let values = store.constraint_values();
    let domains: Vec<&str> = values.domains.iter().map(String::as_str).collect();
    let styles: Vec<&str> = values.styles.iter().map(String::as_str).collect();
    assert_eq!(domains, ["default"]);
    assert_eq!(styles, ["alternative", "default", "short"]);
}

#[test]
fn known_keys_includes_names_and_both_namespaces() {
    let mut store = MappingRegistry::new();
    store.register_symbols(vec![symbol("0021", "exclamation mark")]).unwrap();
    store
        .register_functions(vec![function("exp", &["exp", "expt"], "exponential")])
        .unwrap();

    assert_eq!(store.known_keys(), ["0021", "exp", "expt"]);
}
