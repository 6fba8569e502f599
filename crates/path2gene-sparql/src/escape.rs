//! Escaping for caller-supplied values embedded in query text.
//!
//! User input only ever lands inside a double-quoted string literal, and
//! configured graph URIs only inside `<...>`. Neither can close its
//! delimiter once passed through these helpers.

use std::fmt::Write;

/// Escape `text` for use inside a `"..."` SPARQL string literal (ECHAR rules).
///
/// The literal still carries the user's exact text, so a fragment used as a
/// `regex()` pattern keeps its regex meaning.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c => out.push(c),
        }
    }
    out
}

/// Percent-encode the characters an IRIREF may not contain.
pub fn escape_iri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len());
    for c in iri.chars() {
        if matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\') || c <= ' ' {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "%{:02X}", byte);
            }
        } else {
            out.push(c);
        }
    }
    out
}
