//! Input limits enforced by front ends before calling into the core.

use std::fmt;

use serde::Deserialize;

use crate::codegen::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_pattern_length: usize,
    pub max_input_length: usize,
    pub max_iterations: i64,
    pub max_sample_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_pattern_length: 1000,
            max_input_length: 10_000,
            max_iterations: 10_000,
            max_sample_length: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitViolation {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for LimitViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Limits {
    pub fn check_pattern(&self, pattern: &str) -> Vec<LimitViolation> {
        let mut out = Vec::new();
        if pattern.is_empty() {
            out.push(violation("pattern", "Pattern is required".to_string()));
        } else if pattern.chars().count() > self.max_pattern_length {
            out.push(violation(
                "pattern",
                format!(
                    "Pattern cannot exceed {} characters",
                    self.max_pattern_length
                ),
            ));
        }
        out
    }

    pub fn check_input(&self, input: &str) -> Vec<LimitViolation> {
        let mut out = Vec::new();
        if input.is_empty() {
            out.push(violation("input", "Test string is required".to_string()));
        } else if input.chars().count() > self.max_input_length {
            out.push(violation(
                "input",
                format!(
                    "Test string cannot exceed {} characters",
                    self.max_input_length
                ),
            ));
        }
        out
    }

    pub fn check_iterations(&self, iterations: i64) -> Vec<LimitViolation> {
        if (1..=self.max_iterations).contains(&iterations) {
            Vec::new()
        } else {
            vec![violation(
                "iterations",
                format!("Iterations must be between 1 and {}", self.max_iterations),
            )]
        }
    }

    /// Pattern plus every input, in that order.
    pub fn check_test<S: AsRef<str>>(&self, pattern: &str, inputs: &[S]) -> Vec<LimitViolation> {
        let mut out = self.check_pattern(pattern);
        for input in inputs {
            out.extend(self.check_input(input.as_ref()));
        }
        out
    }

    pub fn check_perf(&self, pattern: &str, input: &str, iterations: i64) -> Vec<LimitViolation> {
        let mut out = self.check_pattern(pattern);
        out.extend(self.check_input(input));
        out.extend(self.check_iterations(iterations));
        out
    }

    /// Pattern, optional sample text, and optional language id.
    pub fn check_codegen(
        &self,
        pattern: &str,
        sample: Option<&str>,
        language: Option<&str>,
    ) -> Vec<LimitViolation> {
        let mut out = self.check_pattern(pattern);
        if sample.is_some_and(|s| s.chars().count() > self.max_sample_length) {
            out.push(violation(
                "sample",
                format!(
                    "Sample text cannot exceed {} characters",
                    self.max_sample_length
                ),
            ));
        }
        if let Some(Err(message)) = language
            .filter(|l| !l.is_empty())
            .map(str::parse::<Language>)
        {
            out.push(violation("language", message));
        }
        out
    }
}

fn violation(field: &'static str, message: String) -> LimitViolation {
    LimitViolation { field, message }
}
