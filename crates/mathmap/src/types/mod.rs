//! Core value types: mapping entries, phrasebooks, constraints, and the
//! spoken-output carrier.

mod constraint;
mod description;
mod entry;

pub use constraint::{DEFAULT_DOMAIN, DEFAULT_STYLE, DynamicConstraint};
pub use description::SpokenDescription;
pub use entry::{MappingEntry, Phrasebook};
