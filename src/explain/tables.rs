//! Fixed lookup tables for escapes and single-character symbols.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Two-character escape sequences with a well-known meaning.
static ESCAPES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("\\b", "Word boundary"),
        ("\\B", "Non-word boundary"),
        ("\\d", "Any digit (0-9)"),
        ("\\D", "Any non-digit"),
        ("\\w", "Any word character (letters, digits, underscore)"),
        ("\\W", "Any non-word character"),
        ("\\s", "Any whitespace character"),
        ("\\S", "Any non-whitespace character"),
        ("\\n", "Newline character"),
        ("\\t", "Tab character"),
        ("\\r", "Carriage return character"),
        ("\\A", "Start of input anchor"),
        ("\\z", "End of input anchor"),
    ])
});

/// Characters that carry meaning when they appear on their own.
static SYMBOLS: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ('^', "Start of string anchor"),
        ('$', "End of string anchor"),
        ('.', "Any character (except newline)"),
        ('*', "Zero or more of the preceding element"),
        ('+', "One or more of the preceding element"),
        ('?', "Zero or one of the preceding element"),
        ('\\', "Escape character"),
        ('|', "Alternation (OR)"),
        ('(', "Start of capturing group"),
        (')', "End of capturing group"),
        ('[', "Start of character class"),
        (']', "End of character class"),
        ('{', "Start of quantifier"),
        ('}', "End of quantifier"),
    ])
});

pub fn escape(sequence: &str) -> Option<&'static str> {
    ESCAPES.get(sequence).copied()
}

pub fn symbol(ch: char) -> Option<&'static str> {
    SYMBOLS.get(&ch).copied()
}
