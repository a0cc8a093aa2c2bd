use std::collections::HashMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::constraint::{DEFAULT_DOMAIN, DEFAULT_STYLE, DynamicConstraint};

/// The domain -> style -> phrase mapping attached to a mapping entry.
///
/// Lookup degrades through a fixed fallback chain, so any caller-supplied
/// (domain, style) pair yields a usable phrase as long as the required
/// `("default", "default")` cell is populated.
///
/// # Example
///
/// ```
/// use mathmap::{DynamicConstraint, phrasebook};
///
/// let book = phrasebook! {
///     "default" => { "default" => "plus sign", "short" => "plus" },
/// };
///
/// // Exact hit.
/// assert_eq!(book.phrase(&DynamicConstraint::new("default", "short")), Some("plus"));
///
/// // Unknown style falls back to the default style.
/// assert_eq!(book.phrase(&DynamicConstraint::new("default", "verbose")), Some("plus sign"));
///
/// // Unknown domain falls back to the default domain, keeping the style.
/// assert_eq!(book.phrase(&DynamicConstraint::new("obscure", "short")), Some("plus"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phrasebook(HashMap<String, HashMap<String, String>>);

impl Phrasebook {
    /// Create an empty phrasebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a phrase under (domain, style), replacing any existing cell.
    pub fn insert(
        &mut self,
        domain: impl Into<String>,
        style: impl Into<String>,
        phrase: impl Into<String>,
    ) {
        self.0
            .entry(domain.into())
            .or_default()
            .insert(style.into(), phrase.into());
    }

    /// Resolve a phrase for the given constraint.
    ///
    /// Fallback order is strictly:
    /// 1. requested (domain, style)
    /// 2. requested domain, default style
    /// 3. default domain, requested style
    /// 4. default domain, default style
    ///
    /// Returns `None` only when the required default cell is absent too.
    pub fn phrase(&self, cstr: &DynamicConstraint) -> Option<&str> {
        self.cell(cstr.domain(), cstr.style())
            .or_else(|| self.cell(cstr.domain(), DEFAULT_STYLE))
            .or_else(|| self.cell(DEFAULT_DOMAIN, cstr.style()))
            .or_else(|| self.cell(DEFAULT_DOMAIN, DEFAULT_STYLE))
    }

    /// Whether the required `("default", "default")` cell is populated.
    pub fn has_default(&self) -> bool {
        self.cell(DEFAULT_DOMAIN, DEFAULT_STYLE)
            .is_some_and(|phrase| !phrase.is_empty())
    }

    /// Iterate over every (domain, style) pair present in this phrasebook.
    pub fn constraints(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(domain, styles)| {
            styles
                .keys()
                .map(move |style| (domain.as_str(), style.as_str()))
        })
    }

    fn cell(&self, domain: &str, style: &str) -> Option<&str> {
        self.0.get(domain)?.get(style).map(String::as_str)
    }
}

/// One symbol or function definition: key, category, alternate names, and
/// the phrasebook holding its spoken descriptions.
///
/// Symbol entries are keyed by a 4-to-6 hex-digit Unicode codepoint string
/// (e.g. `"0028"`); function entries by a lowercase token (e.g. `"log"`),
/// optionally with alternate tokens in `names` that resolve to the same
/// phrasebook.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct MappingEntry {
    /// Primary lookup key.
    pub key: String,

    /// Unicode general-category abbreviation for symbols (`"Sm"`, `"Po"`),
    /// semantic grouping label for functions (`"Trigonometric"`, `"Limits"`).
    pub category: String,

    /// Alternate input tokens resolving to this entry. Empty for symbols.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub names: Vec<String>,

    /// Spoken descriptions keyed by domain and style.
    pub mappings: Phrasebook,
}
