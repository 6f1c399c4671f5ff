// src/tables/emit/rust.rs
use std::fmt::Write;

use super::{EmitOptions, Emitter, count_const};
use crate::tables::escape::escape_literal;
use crate::tables::order::OrderedTokens;
use crate::tables::tokens::Category;

const INDENT: &str = "    ";

// Strict and reserved keywords, 2024 edition. Variants live in their enum's
// namespace, so only these and `_` can break the output.
const RUST_RESERVED: &[&str] = &[
    "_", "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
    "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
    "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try", "gen",
];

/// Rust backend, meant to be pulled in with `include!`. Variant names keep
/// the registry's spelling, hence the `non_camel_case_types` allowances.
#[derive(Debug, Clone)]
pub struct RustModule {
    pub options: EmitOptions,
}

impl Default for RustModule {
    fn default() -> Self {
        Self {
            options: EmitOptions::rust_defaults(),
        }
    }
}

impl RustModule {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    fn enum_header(out: &mut String, name: &str) {
        out.push_str("#[allow(non_camel_case_types, clippy::upper_case_acronyms)]\n");
        out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
        out.push_str("#[repr(u32)]\n");
        let _ = writeln!(out, "pub enum {name} {{");
    }
}

impl Emitter for RustModule {
    fn emit(&self, tokens: &OrderedTokens) -> String {
        let o = &self.options;
        let mut out = String::with_capacity(128 * (tokens.len() + 16));

        let _ = write!(
            out,
            "// DO NOT MODIFY THIS FILE!\n//\n// Generated by {}. Edit the token registry and \
             regenerate instead;\n// hand edits are lost on the next build.\n\n",
            o.generator
        );

        Self::enum_header(&mut out, &o.categories_enum);
        for c in Category::all() {
            let _ = writeln!(out, "{INDENT}{} = {},", c.const_name(), c.tag());
        }
        out.push_str("}\n\n");

        Self::enum_header(&mut out, &o.names_enum);
        for (name, id) in tokens.names() {
            let _ = writeln!(out, "{INDENT}{name} = {id},");
        }
        out.push_str("}\n\n");
        let _ = write!(
            out,
            "pub const {}: usize = {};\n\n",
            count_const(&o.names_enum),
            tokens.len()
        );

        let _ = write!(
            out,
            "#[derive(Debug, Clone, Copy, PartialEq, Eq)]\npub struct {} {{\n\
             {INDENT}pub name: &'static str,\n\
             {INDENT}pub length: usize,\n\
             {INDENT}pub kind: {},\n\
             {INDENT}pub name_id: {},\n}}\n\n",
            o.record, o.categories_enum, o.names_enum
        );

        let descriptors = tokens.descriptors();
        let _ = writeln!(
            out,
            "pub static {}: [{}; {}] = [",
            o.array,
            o.record,
            descriptors.len()
        );
        for d in descriptors {
            let _ = writeln!(out, "{INDENT}{} {{", o.record);
            let _ = writeln!(out, "{INDENT}{INDENT}name: \"{}\",", escape_literal(&d.literal));
            let _ = writeln!(out, "{INDENT}{INDENT}length: {},", d.length);
            let _ = writeln!(
                out,
                "{INDENT}{INDENT}kind: {}::{},",
                o.categories_enum,
                d.category.const_name()
            );
            let _ = writeln!(out, "{INDENT}{INDENT}name_id: {}::{},", o.names_enum, d.name);
            let _ = writeln!(out, "{INDENT}}},");
        }
        out.push_str("];\n");
        out
    }

    fn reserved_names(&self) -> Vec<String> {
        RUST_RESERVED.iter().map(|s| s.to_string()).collect()
    }

    fn extension(&self) -> &'static str {
        "rs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::order::assign_ids;
    use crate::tables::registry::{RawDefinition, Registry, RegistrySpec};

    #[test]
    fn renders_static_array() {
        let spec = RegistrySpec {
            definitions: vec![
                RawDefinition::new("\t", "WHITESPACE", "TAB"),
                RawDefinition::new("==", "PUNCTUATOR", "EQUAL"),
            ],
            extra_names: vec!["VARIABLE".into()],
        };
        let out = RustModule::default().emit(&assign_ids(&Registry::validate(&spec).unwrap()));
        assert!(out.contains("pub static TOKENSTRS: [TokenData; 2] = ["));
        assert!(out.contains("        name: \"\\t\",\n        length: 1,\n"));
        assert!(out.contains("    EQUAL = 0,\n    TAB = 1,\n    VARIABLE = 2,\n"));
        assert!(out.contains("pub const NAMEID_COUNT: usize = 3;"));
        assert!(out.contains("kind: TokenType::PUNCTUATOR,"));
    }
}
