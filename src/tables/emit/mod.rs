// src/tables/emit/mod.rs
//
// Renders ordered tokens as source text. Section order is fixed for every
// backend: preamble, support declarations, category enum, name-id enum,
// record shape, descriptor array.

pub mod c;
pub mod rust;

pub use c::CHeader;
pub use rust::RustModule;

use super::order::OrderedTokens;

/// Names used in generated code. `Default` reproduces the names the C scanner
/// already includes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Printed in the "do not modify" preamble.
    pub generator: String,
    pub categories_enum: String,
    pub names_enum: String,
    pub record: String,
    pub array: String,
    /// Only used by the C backend.
    pub include_guard: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            generator: "gen_token_tables".into(),
            categories_enum: "tokentypes".into(),
            names_enum: "nameids".into(),
            record: "tokendata".into(),
            array: "tokenstrs".into(),
            include_guard: "TOKENS_H".into(),
        }
    }
}

impl EmitOptions {
    pub fn rust_defaults() -> Self {
        Self {
            categories_enum: "TokenType".into(),
            names_enum: "NameId".into(),
            record: "TokenData".into(),
            array: "TOKENSTRS".into(),
            ..Self::default()
        }
    }
}

/// One output language.
pub trait Emitter {
    fn emit(&self, tokens: &OrderedTokens) -> String;

    /// Identifiers a symbolic name must not take: language keywords plus
    /// whatever the emitted source declares in the same namespace.
    fn reserved_names(&self) -> Vec<String>;

    /// Conventional file extension for the output.
    fn extension(&self) -> &'static str;
}

/// `NAMEIDS_COUNT` style constant name for a declared item.
pub(crate) fn count_const(item: &str) -> String {
    format!("{}_COUNT", item.to_ascii_uppercase())
}
