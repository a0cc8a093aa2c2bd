//! Constraint-keyed lookup store: registration, resolution, and the
//! user-facing map.

mod error;
mod lint;
mod map;
mod registry;

pub use error::{LoadError, LoadWarning, compute_suggestions};
pub use lint::lint_entries;
pub use map::MathMap;
pub use registry::{ConstraintValues, MappingRegistry};
