//! Single-pass structural scanner for regex patterns.
//!
//! This is not a regex parser. It walks the pattern left to right with one
//! cursor and classifies each span it consumes: escapes, bracketed character
//! classes, parenthesized groups, brace quantifiers, and single characters.
//! Unterminated constructs fall back to a one-character literal token, so the
//! scan never fails and always terminates.

use super::ExplanationPart;
use super::tables;

pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    pub fn scan(&mut self) -> Vec<ExplanationPart> {
        let mut parts = Vec::new();

        while let Some(ch) = self.peek() {
            let start = self.pos;
            let explanation = match ch {
                '\\' if start + 1 < self.input.len() => self.escape(),
                '[' => self.char_class(),
                '(' => self.group(),
                '{' => self.quantifier(),
                _ => self.single(ch),
            };
            debug_assert!(self.pos > start, "scanner cursor must advance");

            let component = &self.input[start..self.pos];
            if !component.is_empty() {
                parts.push(ExplanationPart::new(component, explanation));
            }
        }

        parts
    }

    fn escape(&mut self) -> String {
        let start = self.pos;
        // Guarded by the caller: a character follows the backslash.
        let escaped = self.input[start + 1..].chars().next().unwrap_or('\\');
        self.pos = start + 1 + escaped.len_utf8();
        let sequence = &self.input[start..self.pos];
        match tables::escape(sequence) {
            Some(text) => text.to_string(),
            None => format!("Escaped character: {escaped}"),
        }
    }

    fn char_class(&mut self) -> String {
        let start = self.pos;
        match find_unescaped(self.input, start + 1, b']') {
            Some(end) => {
                self.pos = end + 1;
                explain_char_class(&self.input[start..=end])
            }
            None => {
                self.pos += 1;
                "Literal '[' character".to_string()
            }
        }
    }

    fn group(&mut self) -> String {
        let start = self.pos;
        match find_matching_paren(self.input, start) {
            Some(end) => {
                self.pos = end + 1;
                explain_group(&self.input[start..=end])
            }
            None => {
                self.pos += 1;
                "Literal '(' character".to_string()
            }
        }
    }

    fn quantifier(&mut self) -> String {
        let start = self.pos;
        let close = self.input[start + 1..].find('}').map(|i| start + 1 + i);
        let explained = close.and_then(|end| {
            explain_quantifier(&self.input[start + 1..end]).map(|text| (end, text))
        });
        match explained {
            Some((end, text)) => {
                self.pos = end + 1;
                text
            }
            None => {
                self.pos += 1;
                "Literal '{' character".to_string()
            }
        }
    }

    fn single(&mut self, ch: char) -> String {
        self.pos += ch.len_utf8();
        match tables::symbol(ch) {
            Some(text) => text.to_string(),
            None => format!("Literal character: '{ch}'"),
        }
    }
}

/// Byte index of the first `closer` at or after `from` that is not preceded
/// by a backslash escape.
fn find_unescaped(input: &str, from: usize, closer: u8) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == closer => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Byte index of the `)` that closes the `(` at `open`, counting nesting depth.
fn find_matching_paren(input: &str, open: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn explain_char_class(class: &str) -> String {
    if let Some(rest) = class.strip_prefix("[^") {
        let inner = rest.strip_suffix(']').unwrap_or(rest);
        return format!("Negated character class - matches any character NOT in: {inner}");
    }

    let inner = &class[1..class.len() - 1];
    for (range, noun) in [
        ("a-z", "lowercase letters"),
        ("A-Z", "uppercase letters"),
        ("0-9", "digits"),
    ] {
        if inner.contains(range) {
            let extra = if inner.len() > 3 {
                " and other specified characters"
            } else {
                ""
            };
            return format!("Character class - matches {noun}{extra}");
        }
    }

    format!("Character class - matches any of: {inner}")
}

fn explain_group(span: &str) -> String {
    let body = &span[1..];
    if body.starts_with("?:") {
        "Non-capturing group".to_string()
    } else if body.starts_with("?=") {
        "Positive lookahead".to_string()
    } else if body.starts_with("?!") {
        "Negative lookahead".to_string()
    } else if body.starts_with("?<=") {
        "Positive lookbehind".to_string()
    } else if body.starts_with("?<!") {
        "Negative lookbehind".to_string()
    } else if let Some(name) = group_name(body) {
        format!("Named capturing group '{name}'")
    } else {
        "Capturing group".to_string()
    }
}

fn group_name(body: &str) -> Option<&str> {
    let rest = body
        .strip_prefix("?P<")
        .or_else(|| body.strip_prefix("?<"))?;
    let end = rest.find('>')?;
    let name = &rest[..end];
    (!name.is_empty()).then_some(name)
}

/// `n`, `n,` and `n,m` interiors; anything else is not a quantifier.
fn explain_quantifier(inner: &str) -> Option<String> {
    let is_count = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match inner.split_once(',') {
        None if is_count(inner) => Some(format!("Quantifier - exactly {inner} times")),
        Some((min, "")) if is_count(min) => Some(format!("Quantifier - {min} or more times")),
        Some((min, max)) if is_count(min) && is_count(max) => {
            Some(format!("Quantifier - between {min} and {max} times"))
        }
        _ => None,
    }
}
