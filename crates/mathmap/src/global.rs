//! Process-wide map storage for the `global-map` feature.
//!
//! Provides lazy, thread-safe access to a shared [`MathMap`] built from the
//! embedded tables. Construction runs exactly once on first use; the map is
//! read-only afterwards, so no lock guards later access.

use std::sync::LazyLock;

use crate::store::MathMap;
use crate::types::SpokenDescription;

static GLOBAL_MATH_MAP: LazyLock<MathMap> =
    LazyLock::new(|| MathMap::new().expect("embedded mapping tables are well-formed"));

/// Provides access to the global map.
pub fn with_math_map<T>(f: impl FnOnce(&MathMap) -> T) -> T {
    f(&GLOBAL_MATH_MAP)
}

/// Evaluates a token against the global map.
pub fn evaluate(text: &str, domain: &str, style: &str) -> SpokenDescription {
    with_math_map(|map| map.evaluate(text, domain, style))
}
