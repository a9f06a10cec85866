//! Catalog of ready-made patterns, embedded at build time.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

const BUILTIN_JSON: &str = include_str!("../data/patterns.json");

static BUILTIN: LazyLock<Result<PatternLibrary, String>> =
    LazyLock::new(|| PatternLibrary::from_json(BUILTIN_JSON).map_err(|e| format!("{e:#}")));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternItem {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "General".to_string()
}

#[derive(Deserialize)]
struct LibraryFile {
    patterns: Vec<PatternItem>,
}

#[derive(Debug, Clone)]
pub struct PatternLibrary {
    items: Vec<PatternItem>,
}

impl PatternLibrary {
    /// The embedded catalog, parsed once.
    pub fn builtin() -> Result<&'static PatternLibrary> {
        BUILTIN
            .as_ref()
            .map_err(|e| anyhow!("embedded pattern catalog is invalid: {e}"))
    }

    pub fn from_json(json: &str) -> Result<PatternLibrary> {
        let file: LibraryFile =
            serde_json::from_str(json).context("failed to parse pattern catalog")?;
        debug!(count = file.patterns.len(), "pattern catalog loaded");
        Ok(PatternLibrary {
            items: file.patterns,
        })
    }

    pub fn all(&self) -> &[PatternItem] {
        &self.items
    }

    /// Distinct categories in sorted order.
    pub fn categories(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|p| p.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&PatternItem> {
        self.items
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    pub fn by_name(&self, name: &str) -> Option<&PatternItem> {
        self.items.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive substring search over name, description, and category.
    pub fn search(&self, term: &str) -> Vec<&PatternItem> {
        let needle = term.to_lowercase();
        self.items
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
