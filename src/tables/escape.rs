// src/tables/escape.rs
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnescapeError {
    #[error("unknown escape `\\{0}` at byte {1}")]
    UnknownEscape(char, usize),
    #[error("dangling backslash at end of literal")]
    Dangling,
}

/// Makes a literal safe to place between double quotes in generated C or
/// Rust source. Backslash must be handled first.
pub fn escape_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape_literal`].
pub fn unescape_literal(escaped: &str) -> Result<String, UnescapeError> {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.char_indices();
    while let Some((_, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some((_, '\\')) => out.push('\\'),
            Some((_, '"')) => out.push('"'),
            Some((_, 'n')) => out.push('\n'),
            Some((_, 't')) => out.push('\t'),
            Some((at, other)) => return Err(UnescapeError::UnknownEscape(other, at)),
            None => return Err(UnescapeError::Dangling),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_the_four_specials() {
        assert_eq!(escape_literal("\""), "\\\"");
        assert_eq!(escape_literal("\\"), "\\\\");
        assert_eq!(escape_literal("\n"), "\\n");
        assert_eq!(escape_literal("\t"), "\\t");
        assert_eq!(escape_literal("a\\\"b"), "a\\\\\\\"b");
        assert_eq!(escape_literal("==="), "===");
    }

    #[test]
    fn backslash_n_is_not_a_newline() {
        // raw backslash followed by 'n' must not collapse into "\n"
        let raw = "\\n";
        let esc = escape_literal(raw);
        assert_eq!(esc, "\\\\n");
        assert_eq!(unescape_literal(&esc).unwrap(), raw);
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!(unescape_literal("a\\"), Err(UnescapeError::Dangling));
        assert_eq!(
            unescape_literal("\\x41"),
            Err(UnescapeError::UnknownEscape('x', 1))
        );
    }
}
