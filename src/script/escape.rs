// src/script/escape.rs
// The two escaping layers applied to every command
//
// Layer 1: values become script string literals (double-quote delimited).
// Layer 2: the finished script is wrapped for a shell (single-quote delimited).
// Layer 1 always runs on values before they are interpolated; layer 2 only ever
// runs on a finished script.

/// Escape a value for use inside a double-quoted script string literal.
/// Backslashes go first so the escapes added for quotes are not doubled.
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a value as a complete script string literal, quotes included.
pub fn literal(value: &str) -> String {
    format!("\"{}\"", escape_literal(value))
}

/// Wrap a finished script in single quotes for a POSIX shell.
/// An embedded single quote closes the quoted run, emits an escaped quote, and reopens.
pub fn shell_single_quote(script: &str) -> String {
    format!("'{}'", script.replace('\'', r"'\''"))
}
