// src/tables/tokens.rs
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Lexical categories the scanner knows about. Closed set; the declared order
/// is the order of the emitted category enumeration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[repr(u32)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Whitespace,
    Identifier,
    Keyword,
    Numeric,
    Punctuator,
    RegularExpression,
    String,
    // never kept by the scanner
    Invalid,
}

impl Category {
    /// Constant name used in generated sources (`WHITESPACE`, `REGULAREXPRESSION`, ...).
    #[inline]
    pub fn const_name(self) -> &'static str {
        self.into()
    }

    /// Every category in declared order.
    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }

    #[inline]
    pub fn tag(self) -> u32 {
        self as u32
    }
}

/// One entry of the registry: a fixed literal the scanner matches verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDefinition {
    pub literal: String,
    pub category: Category,
    pub name: String,
}

impl TokenDefinition {
    pub fn new(literal: impl Into<String>, category: Category, name: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            category,
            name: name.into(),
        }
    }
}

/// Emitted record. `length` is the byte length of the raw literal, never of
/// its escaped form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    pub literal: String,
    pub length: usize,
    pub category: Category,
    pub name: String,
    pub id: u32,
}

impl TokenDescriptor {
    pub(crate) fn from_definition(def: &TokenDefinition, id: u32) -> Self {
        Self {
            literal: def.literal.clone(),
            length: def.literal.len(),
            category: def.category,
            name: def.name.clone(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn declared_order_matches_tags() {
        for (i, c) in Category::all().enumerate() {
            assert_eq!(c.tag() as usize, i);
        }
        assert_eq!(Category::all().count(), 8);
    }

    #[test]
    fn const_names_are_upper_case() {
        assert_eq!(Category::RegularExpression.const_name(), "REGULAREXPRESSION");
        assert_eq!(Category::Whitespace.const_name(), "WHITESPACE");
        assert_eq!(Category::from_str("PUNCTUATOR"), Ok(Category::Punctuator));
        assert!(Category::from_str("OPERATOR").is_err());
    }

    #[test]
    fn descriptor_length_is_raw_byte_length() {
        let def = TokenDefinition::new("\"", Category::String, "SINGEQUOTE");
        let d = TokenDescriptor::from_definition(&def, 7);
        assert_eq!(d.length, 1);
        assert_eq!(d.id, 7);
    }
}
