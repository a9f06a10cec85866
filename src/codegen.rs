//! Ready-to-paste snippets that use a pattern from other languages.
//!
//! Templates carry `@PATTERN@` and `@SAMPLE@` markers. The pattern is escaped
//! for the literal syntax each template wraps it in; the sample becomes a
//! double-quoted string, or the placeholder identifier `your_test_string`
//! when no sample is given.

use std::str::FromStr;

use serde::Serialize;

const SAMPLE_PLACEHOLDER: &str = "your_test_string";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    CSharp,
    JavaScript,
    Python,
    Java,
    Php,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::CSharp,
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Php,
    ];

    /// Identifier accepted on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Language::CSharp => "csharp",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Php => "php",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::CSharp => "C#",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Php => "PHP",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Language::CSharp => "C# implementation using System.Text.RegularExpressions",
            Language::JavaScript => "JavaScript implementation using built-in RegExp",
            Language::Python => "Python implementation using the re module",
            Language::Java => "Java implementation using java.util.regex package",
            Language::Php => "PHP implementation using PCRE functions",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Language::CSharp => CSHARP,
            Language::JavaScript => JAVASCRIPT,
            Language::Python => PYTHON,
            Language::Java => JAVA,
            Language::Php => PHP,
        }
    }

    /// Pattern text as it must appear inside this template's literal.
    fn escape_pattern(self, pattern: &str) -> String {
        match self {
            // verbatim string @"..."
            Language::CSharp => pattern.replace('"', "\"\""),
            // regex literal /.../g
            Language::JavaScript => pattern.replace('/', "\\/"),
            // raw string r'...'; \' keeps the backslash, which still matches a quote
            Language::Python => pattern.replace('\'', "\\'"),
            Language::Java => pattern.replace('\\', "\\\\").replace('"', "\\\""),
            // single-quoted '/.../'
            Language::Php => pattern
                .replace('\\', "\\\\")
                .replace('\'', "\\'")
                .replace('/', "\\/"),
        }
    }

    fn quote_sample(self, sample: &str) -> String {
        let mut escaped = sample.replace('\\', "\\\\").replace('"', "\\\"");
        if self == Language::Php {
            escaped = escaped.replace('$', "\\$");
        }
        format!("\"{escaped}\"")
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.id() == lower)
            .ok_or_else(|| "Invalid language specified".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeSnippet {
    pub language: &'static str,
    pub code: String,
    pub description: &'static str,
}

/// Snippet for one language. An empty or absent sample uses a placeholder
/// variable name.
pub fn generate_for(language: Language, pattern: &str, sample: Option<&str>) -> CodeSnippet {
    let sample = match sample {
        Some(s) if !s.is_empty() => language.quote_sample(s),
        _ => SAMPLE_PLACEHOLDER.to_string(),
    };
    let code = language
        .template()
        .replace("@PATTERN@", &language.escape_pattern(pattern))
        .replace("@SAMPLE@", &sample);

    CodeSnippet {
        language: language.display_name(),
        code,
        description: language.description(),
    }
}

/// Snippets for every supported language, in [`Language::ALL`] order.
pub fn generate(pattern: &str, sample: Option<&str>) -> Vec<CodeSnippet> {
    Language::ALL
        .into_iter()
        .map(|l| generate_for(l, pattern, sample))
        .collect()
}

const CSHARP: &str = r#"using System.Text.RegularExpressions;

var pattern = @"@PATTERN@";
var regex = new Regex(pattern);
var testString = @SAMPLE@;

// Test if string matches
bool isMatch = regex.IsMatch(testString);

// Get all matches
MatchCollection matches = regex.Matches(testString);
foreach (Match match in matches)
{
    Console.WriteLine($"Match: {match.Value} at position {match.Index}");
}
"#;

const JAVASCRIPT: &str = r#"const pattern = /@PATTERN@/g;
const testString = @SAMPLE@;

// Test if string matches
const isMatch = pattern.test(testString);
console.log('Is match:', isMatch);

// Get all matches
const matches = testString.match(pattern);
if (matches) {
    matches.forEach((match, index) => {
        console.log(`Match ${index + 1}: ${match}`);
    });
} else {
    console.log('No matches found');
}
"#;

const PYTHON: &str = r#"import re

pattern = r'@PATTERN@'
test_string = @SAMPLE@

# Test if string matches
is_match = re.search(pattern, test_string) is not None
print(f'Is match: {is_match}')

# Get all matches
matches = re.findall(pattern, test_string)
for i, match in enumerate(matches, 1):
    print(f'Match {i}: {match}')

# Get match objects with positions
for match in re.finditer(pattern, test_string):
    print(f'Match: {match.group()} at position {match.start()}-{match.end()}')
"#;

const JAVA: &str = r#"import java.util.regex.Pattern;
import java.util.regex.Matcher;

public class RegexExample {
    public static void main(String[] args) {
        String pattern = "@PATTERN@";
        String testString = @SAMPLE@;

        // Compile pattern
        Pattern compiledPattern = Pattern.compile(pattern);
        Matcher matcher = compiledPattern.matcher(testString);

        // Test if string matches
        boolean isMatch = matcher.find();
        System.out.println("Is match: " + isMatch);

        // Reset matcher and find all matches
        matcher.reset();
        int matchCount = 1;
        while (matcher.find()) {
            System.out.println("Match " + matchCount + ": " + matcher.group() + " at position " + matcher.start());
            matchCount++;
        }
    }
}
"#;

const PHP: &str = r#"<?php
$pattern = '/@PATTERN@/';
$testString = @SAMPLE@;

// Test if string matches
$isMatch = preg_match($pattern, $testString);
echo "Is match: " . ($isMatch ? 'true' : 'false') . "\n";

// Get all matches
$matches = [];
$matchCount = preg_match_all($pattern, $testString, $matches, PREG_OFFSET_CAPTURE);

if ($matchCount > 0) {
    foreach ($matches[0] as $index => $match) {
        echo "Match " . ($index + 1) . ": " . $match[0] . " at position " . $match[1] . "\n";
    }
} else {
    echo "No matches found\n";
}
?>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_gets_a_snippet() {
        let snippets = generate("abc", None);
        let names: Vec<&str> = snippets.iter().map(|s| s.language).collect();
        assert_eq!(names, vec!["C#", "JavaScript", "Python", "Java", "PHP"]);
        assert!(snippets.iter().all(|s| s.code.contains("abc")));
        assert!(
            snippets
                .iter()
                .all(|s| !s.code.contains("@PATTERN@") && !s.code.contains("@SAMPLE@"))
        );
    }

    #[test]
    fn empty_pattern_still_generates() {
        assert_eq!(generate("", None).len(), Language::ALL.len());
    }

    #[test]
    fn parse_language_ids() {
        assert_eq!("CSharp".parse::<Language>(), Ok(Language::CSharp));
        assert_eq!("php".parse::<Language>(), Ok(Language::Php));
        assert_eq!(
            "NotALang".parse::<Language>(),
            Err("Invalid language specified".to_string())
        );
    }

    #[test]
    fn missing_sample_uses_placeholder() {
        let s = generate_for(Language::Python, "a", Some(""));
        assert!(s.code.contains("test_string = your_test_string\n"));
        let s = generate_for(Language::Java, "a", Some("say \"hi\""));
        assert!(s.code.contains(r#"String testString = "say \"hi\"";"#));
    }

    #[test]
    fn pattern_escaping_per_language() {
        let p = r#"\d+/"x"'"#;
        let code = |l| generate_for(l, p, None).code;
        assert!(code(Language::CSharp).contains(r#"var pattern = @"\d+/""x""'";"#));
        assert!(code(Language::JavaScript).contains(r#"const pattern = /\d+\/"x"'/g;"#));
        assert!(code(Language::Python).contains(r#"pattern = r'\d+/"x"\''"#));
        assert!(code(Language::Java).contains(r#"String pattern = "\\d+/\"x\"'";"#));
        assert!(code(Language::Php).contains(r#"$pattern = '/\\d+\/"x"\'/';"#));
    }

    #[test]
    fn php_sample_does_not_interpolate() {
        let s = generate_for(Language::Php, "a", Some("$5"));
        assert!(s.code.contains(r#"$testString = "\$5";"#));
    }

    #[test]
    fn descriptions_name_the_library() {
        let s = generate_for(Language::JavaScript, "a", None);
        assert_eq!(s.description, "JavaScript implementation using built-in RegExp");
        assert!(s.code.starts_with("const pattern = /a/g;\n"));
    }
}
