use std::fmt::{Display, Formatter, Result as FmtResult};

use bon::Builder;

/// The carrier handed to the surrounding accessibility layer for spoken
/// output.
///
/// Deliberately a single-field wrapper: the framework consuming it treats
/// the description as opaque text.
///
/// # Example
///
/// ```
/// use mathmap::SpokenDescription;
///
/// let desc = SpokenDescription::builder().text("left parenthesis").build();
/// assert_eq!(desc.to_string(), "left parenthesis");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct SpokenDescription {
    /// The text to speak.
    #[builder(default)]
    pub text: String,
}

impl Display for SpokenDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.text)
    }
}

impl From<SpokenDescription> for String {
    fn from(desc: SpokenDescription) -> Self {
        desc.text
    }
}
