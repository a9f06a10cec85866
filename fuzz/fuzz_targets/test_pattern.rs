#![no_main]

use std::sync::LazyLock;

use libfuzzer_sys::fuzz_target;
use regexcraft::tester::RegexTester;

static TESTER: LazyLock<RegexTester> = LazyLock::new(RegexTester::default);

// First line is the pattern, the rest is the input.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (pattern, input) = text.split_once('\n').unwrap_or((text, ""));
    let outcome = TESTER.test_pattern(pattern, input);
    assert_eq!(outcome.error_message.is_some(), !outcome.is_valid_pattern);
    if !outcome.is_valid_pattern {
        assert!(outcome.matches.is_empty());
    }
    for m in &outcome.matches {
        assert!(m.start + m.length <= input.len());
    }
});
