use serde::{Deserialize, Serialize};

/// Name of the fallback domain present in every well-formed phrasebook.
pub const DEFAULT_DOMAIN: &str = "default";

/// Name of the fallback style within a domain.
pub const DEFAULT_STYLE: &str = "default";

/// A (domain, style) selector pair for phrase lookup.
///
/// The domain names a verbosity/context namespace; the style names a
/// verbosity variant within it. Unknown values are ordinary inputs: lookup
/// degrades through the fallback chain rather than failing.
///
/// # Example
///
/// ```
/// use mathmap::DynamicConstraint;
///
/// let cstr = DynamicConstraint::new("default", "short");
/// assert_eq!(cstr.domain(), "default");
/// assert_eq!(cstr.style(), "short");
///
/// let fallback = DynamicConstraint::default();
/// assert_eq!(fallback.domain(), "default");
/// assert_eq!(fallback.style(), "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DynamicConstraint {
    domain: String,
    style: String,
}

impl DynamicConstraint {
    /// Create a constraint from domain and style selectors.
    pub fn new(domain: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            style: style.into(),
        }
    }

    /// The requested domain.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The requested style.
    pub fn style(&self) -> &str {
        &self.style
    }
}

impl Default for DynamicConstraint {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN, DEFAULT_STYLE)
    }
}
