use super::ExplanationPart;

/// One-sentence description built from anchor presence and the remaining parts.
///
/// Anchors are detected anywhere in the sequence, not only at the ends.
pub fn summarize(parts: &[ExplanationPart]) -> String {
    let has_start = parts.iter().any(|p| p.component == "^");
    let has_end = parts.iter().any(|p| p.component == "$");

    let mut summary = String::from(match (has_start, has_end) {
        (true, true) => "Matches the entire string that ",
        (true, false) => "Matches strings that start with ",
        (false, true) => "Matches strings that end with ",
        (false, false) => "Matches strings containing ",
    });

    let rest: Vec<&ExplanationPart> = parts
        .iter()
        .filter(|p| p.component != "^" && p.component != "$")
        .collect();

    match rest.as_slice() {
        [] => {}
        [only] => summary.push_str(describe(only)),
        _ => summary.push_str("a pattern consisting of multiple components"),
    }

    summary
}

fn describe(part: &ExplanationPart) -> &'static str {
    let c = part.component.as_str();
    if c.starts_with('[') && c.ends_with(']') {
        "characters from a specific set"
    } else if c.contains('+') {
        "one or more characters"
    } else if c.contains('*') {
        "zero or more characters"
    } else if c.contains('?') {
        "optional characters"
    } else {
        "specific characters or patterns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(component: &str) -> ExplanationPart {
        ExplanationPart::new(component, "")
    }

    #[test]
    fn opening_clause_by_anchor() {
        assert_eq!(
            summarize(&[part("^"), part("$")]),
            "Matches the entire string that "
        );
        assert_eq!(
            summarize(&[part("^"), part("a")]),
            "Matches strings that start with specific characters or patterns"
        );
        assert_eq!(
            summarize(&[part("a"), part("$")]),
            "Matches strings that end with specific characters or patterns"
        );
        assert_eq!(summarize(&[]), "Matches strings containing ");
    }

    #[test]
    fn single_part_heuristics() {
        assert_eq!(
            summarize(&[part("[abc]")]),
            "Matches strings containing characters from a specific set"
        );
        assert_eq!(
            summarize(&[part("(a+)")]),
            "Matches strings containing one or more characters"
        );
        assert_eq!(
            summarize(&[part("*")]),
            "Matches strings containing zero or more characters"
        );
        assert_eq!(
            summarize(&[part("?")]),
            "Matches strings containing optional characters"
        );
    }

    #[test]
    fn many_parts_are_generic() {
        assert_eq!(
            summarize(&[part("^"), part("a"), part("b"), part("$")]),
            "Matches the entire string that a pattern consisting of multiple components"
        );
    }
}
