//! Standalone catalog validation for authors.
//!
//! Loading a catalog only rejects records search cannot handle. This module
//! goes further for `topics validate`: it loads the file the same way and
//! then reports non-fatal findings (duplicate names, duplicate keywords,
//! unconventional difficulty labels) without changing the catalog.

use std::collections::HashMap;
use std::path::Path;

use crate::catalog::TopicCatalog;

/// Difficulty labels the learning platform's views know how to display.
pub const KNOWN_DIFFICULTIES: &[&str] = &["Beginner", "Intermediate", "Advanced"];

/// Result of validating a catalog file.
#[derive(Debug)]
pub struct ValidationResult {
    pub catalog: TopicCatalog,
    /// Non-fatal issues found during validation
    pub warnings: Vec<String>,
}

/// Validate a catalog file.
///
/// Fails if the file cannot be read, parsed, or contains a record with an
/// empty field. Everything else is reported as a warning.
pub fn validate_catalog(path: &Path) -> crate::error::Result<ValidationResult> {
    let catalog = TopicCatalog::load(path)?;
    let warnings = lint(&catalog);
    Ok(ValidationResult { catalog, warnings })
}

/// Collect authoring warnings for an already-loaded catalog.
pub fn lint(catalog: &TopicCatalog) -> Vec<String> {
    let mut warnings = Vec::new();

    if catalog.is_empty() {
        warnings.push("catalog contains no topics".to_string());
        return warnings;
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    for (index, topic) in catalog.topics().iter().enumerate() {
        if let Some(first) = seen.get(&topic.name.to_lowercase()) {
            warnings.push(format!(
                "topic #{index} '{}' duplicates the name of topic #{first}",
                topic.name
            ));
        } else {
            seen.insert(topic.name.to_lowercase(), index);
        }

        if !KNOWN_DIFFICULTIES
            .iter()
            .any(|d| d.eq_ignore_ascii_case(&topic.difficulty))
        {
            warnings.push(format!(
                "topic '{}' has difficulty '{}' (expected one of: {})",
                topic.name,
                topic.difficulty,
                KNOWN_DIFFICULTIES.join(", ")
            ));
        }

        let mut keywords: Vec<String> = topic.keywords.iter().map(|k| k.to_lowercase()).collect();
        keywords.sort();
        keywords.dedup();
        if keywords.len() != topic.keywords.len() {
            warnings.push(format!("topic '{}' has duplicate keywords", topic.name));
        }

        if let Some(short) = topic.keywords.iter().find(|k| k.trim().chars().count() < 2) {
            warnings.push(format!(
                "topic '{}' has a one-character keyword '{short}' that matches any query containing it",
                topic.name
            ));
        }
    }

    warnings
}
