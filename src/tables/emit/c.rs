// src/tables/emit/c.rs
use std::fmt::Write;

use super::{EmitOptions, Emitter, count_const};
use crate::tables::escape::escape_literal;
use crate::tables::order::OrderedTokens;
use crate::tables::tokens::Category;

const TAB: &str = "\t";

// C11 keywords, the C23 additions, and what <stddef.h> declares.
const C_RESERVED: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
    "alignas", "alignof", "bool", "constexpr", "false", "nullptr", "static_assert",
    "thread_local", "true", "typeof", "typeof_unqual", "NULL", "offsetof", "size_t",
    "ptrdiff_t", "wchar_t", "max_align_t",
];

/// C header backend: enums, a `typedef struct` and a designated-initializer
/// array the C scanner walks front to back.
#[derive(Debug, Clone, Default)]
pub struct CHeader {
    pub options: EmitOptions,
}

impl CHeader {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    fn warning(&self, out: &mut String) {
        let _ = write!(
            out,
            "/*\n * DO NOT MODIFY THIS FILE!\n *\n * Generated by {}. Edit the token registry and \
             regenerate instead;\n * hand edits are lost on the next build.\n */\n\n",
            self.options.generator
        );
    }

    fn support(&self, out: &mut String) {
        let guard = &self.options.include_guard;
        let _ = write!(out, "#ifndef {guard}\n#define {guard}\n\n#include <stddef.h>\n\n");
    }

    fn categories(&self, out: &mut String) {
        let _ = writeln!(out, "enum {} {{", self.options.categories_enum);
        for c in Category::all() {
            let _ = writeln!(out, "{TAB}{},", c.const_name());
        }
        out.push_str("};\n\n");
    }

    fn name_ids(&self, out: &mut String, tokens: &OrderedTokens) {
        let _ = writeln!(out, "enum {} {{", self.options.names_enum);
        for (name, id) in tokens.names() {
            let _ = writeln!(out, "{TAB}{name} = {id},");
        }
        out.push_str("};\n\n");
        let _ = writeln!(out, "#define {} {}", count_const(&self.options.names_enum), tokens.len());
        let _ = write!(
            out,
            "#define {} {}\n\n",
            count_const(&self.options.array),
            tokens.descriptors().len()
        );
    }

    fn record(&self, out: &mut String) {
        let rec = &self.options.record;
        let _ = write!(
            out,
            "typedef struct {rec} {{\n{TAB}const char *name;\n{TAB}size_t length;\n{TAB}int type;\n\
             {TAB}size_t nameid;\n}} {rec};\n\n"
        );
    }

    fn array(&self, out: &mut String, tokens: &OrderedTokens) {
        let descriptors = tokens.descriptors();
        if descriptors.is_empty() {
            // C has no empty initializer lists; the count define says 0.
            let _ = write!(
                out,
                "static const {} {}[1] = {{ {{ 0 }} }};\n\n",
                self.options.record, self.options.array
            );
            return;
        }
        let _ = writeln!(out, "static const {} {}[] = {{", self.options.record, self.options.array);
        for d in descriptors {
            let _ = writeln!(out, "{TAB}{{");
            let _ = writeln!(out, "{TAB}{TAB}.name = \"{}\",", escape_literal(&d.literal));
            let _ = writeln!(out, "{TAB}{TAB}.length = {},", d.length);
            let _ = writeln!(out, "{TAB}{TAB}.type = {},", d.category.const_name());
            let _ = writeln!(out, "{TAB}{TAB}.nameid = {},", d.name);
            let _ = writeln!(out, "{TAB}}},");
        }
        out.push_str("};\n\n");
    }
}

impl Emitter for CHeader {
    fn emit(&self, tokens: &OrderedTokens) -> String {
        let mut out = String::with_capacity(128 * (tokens.len() + 16));
        self.warning(&mut out);
        self.support(&mut out);
        self.categories(&mut out);
        self.name_ids(&mut out, tokens);
        self.record(&mut out);
        self.array(&mut out, tokens);
        let _ = writeln!(out, "#endif /* {} */", self.options.include_guard);
        out
    }

    /// Enumerators, macros, the typedef and the array share one namespace
    /// with the name ids. Enum and struct tags live apart and are not listed.
    fn reserved_names(&self) -> Vec<String> {
        let o = &self.options;
        let mut out: Vec<String> = C_RESERVED.iter().map(|s| s.to_string()).collect();
        out.extend(Category::all().map(|c| c.const_name().to_owned()));
        out.extend([
            count_const(&o.names_enum),
            count_const(&o.array),
            o.record.clone(),
            o.array.clone(),
            o.include_guard.clone(),
        ]);
        out
    }

    fn extension(&self) -> &'static str {
        "h"
    }
}
