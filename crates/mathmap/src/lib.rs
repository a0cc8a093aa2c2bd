pub mod store;
pub mod tables;
pub mod types;

#[cfg(feature = "global-map")]
pub mod global;

pub use store::{
    ConstraintValues, LoadError, LoadWarning, MappingRegistry, MathMap, compute_suggestions,
    lint_entries,
};
pub use types::{
    DEFAULT_DOMAIN, DEFAULT_STYLE, DynamicConstraint, MappingEntry, Phrasebook, SpokenDescription,
};

/// Creates a [`Phrasebook`] from nested domain/style/phrase literals.
///
/// # Example
///
/// ```
/// use mathmap::{DynamicConstraint, phrasebook};
///
/// let book = phrasebook! {
///     "default" => { "default" => "number sign", "short" => "number" },
/// };
/// assert_eq!(
///     book.phrase(&DynamicConstraint::new("default", "short")),
///     Some("number"),
/// );
/// ```
#[macro_export]
macro_rules! phrasebook {
    {} => {
        $crate::Phrasebook::new()
    };
    { $($domain:expr => { $($style:expr => $phrase:expr),+ $(,)? }),+ $(,)? } => {
        {
            let mut book = $crate::Phrasebook::new();
            $(
                $(
                    book.insert($domain, $style, $phrase);
                )+
            )+
            book
        }
    };
}
