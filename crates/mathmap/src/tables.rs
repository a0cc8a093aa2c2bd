//! Embedded symbol and function mapping tables.
//!
//! The tables are compiled into the binary and deserialized once at map
//! construction; no files are read at runtime. Entry order matches the
//! authored order of the source tables.

use crate::store::LoadError;
use crate::types::MappingEntry;

const SYMBOL_TABLE: &str = include_str!("../assets/symbols.json");
const FUNCTION_TABLE: &str = include_str!("../assets/functions.json");

/// The Unicode symbol mappings: one entry per codepoint, keyed by its
/// 4-digit uppercase hex string.
pub fn symbol_mappings() -> Result<Vec<MappingEntry>, LoadError> {
    parse(SYMBOL_TABLE, "symbol")
}

/// The named-function mappings: one entry per function, keyed by its
/// canonical lowercase token, with alternate tokens in `names`.
pub fn function_mappings() -> Result<Vec<MappingEntry>, LoadError> {
    parse(FUNCTION_TABLE, "function")
}

fn parse(raw: &str, table: &'static str) -> Result<Vec<MappingEntry>, LoadError> {
    serde_json::from_str(raw).map_err(|source| LoadError::Parse { table, source })
}
