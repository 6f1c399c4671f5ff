// src/tables/builtin.rs
//
// The token set the C scanner ships with.

use super::registry::{RawDefinition, RegistrySpec};

/// `(literal, category, name)`. Declaration order carries no meaning; the
/// emission order is computed.
const DEFINITIONS: &[(&str, &str, &str)] = &[
    // quotes open string scanning
    ("'", "STRING", "QUOTE"),
    // historical name, the scanner refers to it as-is
    ("\"", "STRING", "SINGEQUOTE"),
    // whitespace
    (" ", "WHITESPACE", "SPACE"),
    ("\n", "WHITESPACE", "NEWLINE"),
    ("\t", "WHITESPACE", "TAB"),
    ("0", "NUMERIC", "NUMBER"),
    // brackets
    ("{", "PUNCTUATOR", "CURLYOPEN"),
    ("}", "PUNCTUATOR", "CURLYCLOSE"),
    ("[", "PUNCTUATOR", "SQUAREOPEN"),
    ("]", "PUNCTUATOR", "SQUARECLOSE"),
    ("(", "PUNCTUATOR", "OPENPAREN"),
    (")", "PUNCTUATOR", "CLOSEPAREN"),
    // comparison / assignment
    ("==", "PUNCTUATOR", "EQUAL"),
    ("<=", "PUNCTUATOR", "LESSTHANEQUAL"),
    (">=", "PUNCTUATOR", "GREATERTHANEQUAL"),
    ("===", "PUNCTUATOR", "EXACTLYEQUAL"),
    ("=", "PUNCTUATOR", "ASSIGNMENT"),
    ("!=", "PUNCTUATOR", "NOTEQUAL"),
    ("!", "PUNCTUATOR", "NOT"),
    (":", "PUNCTUATOR", "COLON"),
    (";", "PUNCTUATOR", "SEMICOLON"),
    (",", "PUNCTUATOR", "COMMA"),
    // keywords
    ("switch", "KEYWORD", "SWITCH"),
    ("return", "KEYWORD", "RETURN"),
    ("if", "KEYWORD", "IF"),
    ("else", "KEYWORD", "ELSE"),
    ("do", "KEYWORD", "DO"),
    ("while", "KEYWORD", "WHILE"),
    ("try", "KEYWORD", "TRY"),
    ("catch", "KEYWORD", "CATCH"),
    ("throw", "KEYWORD", "THROW"),
    ("function", "KEYWORD", "FUNCTION"),
    ("var", "KEYWORD", "VAR"),
    ("let", "KEYWORD", "LET"),
    ("const", "KEYWORD", "CONST"),
];

/// Token kinds the scanner produces without a fixed literal.
const EXTRA_NAMES: &[&str] = &["VARIABLE"];

pub fn registry() -> RegistrySpec {
    RegistrySpec {
        definitions: DEFINITIONS
            .iter()
            .map(|&(literal, category, name)| RawDefinition::new(literal, category, name))
            .collect(),
        extra_names: EXTRA_NAMES.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::registry::Registry;

    #[test]
    fn builtin_registry_is_valid() {
        let r = Registry::validate(&registry()).unwrap();
        assert_eq!(r.definitions().len(), 35);
        assert_eq!(r.id_count(), 36);
    }
}
