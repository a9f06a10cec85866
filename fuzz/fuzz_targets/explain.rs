#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(pattern) = std::str::from_utf8(data) else {
        return;
    };
    let explanation = regexcraft::explain::explain(pattern);
    let rebuilt: String = explanation
        .parts
        .iter()
        .map(|p| p.component.as_str())
        .collect();
    assert_eq!(rebuilt, pattern);
});
