//! Topic catalog: the immutable, ordered collection of topics that search,
//! sampling and filtering run against.
//!
//! A catalog is built once (from the embedded default catalog, or from TOML /
//! JSON files) and then shared read-only. Records are validated at
//! construction so that search never has to deal with malformed entries.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default catalog of computer-science topics shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../data/topics.toml");

/// A single searchable topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub name: String,
    pub category: String,
    /// Conventionally "Beginner", "Intermediate" or "Advanced", but free text.
    pub difficulty: String,
    pub description: String,
    /// Aliases and synonyms matched in addition to the name.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl TopicRecord {
    /// Build a record from borrowed parts. Not validated until it joins a catalog.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        difficulty: impl Into<String>,
        description: impl Into<String>,
        keywords: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            difficulty: difficulty.into(),
            description: description.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// On-disk TOML layout: an array of `[[topic]]` tables.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "topic")]
    topics: Vec<TopicRecord>,
}

/// Immutable, validated, ordered topic collection.
#[derive(Debug, Clone, Default)]
pub struct TopicCatalog {
    topics: Vec<TopicRecord>,
    /// All known categories with topic counts
    categories: BTreeMap<String, usize>,
}

impl TopicCatalog {
    /// Build a catalog from records, validating each one.
    ///
    /// Names are not required to be unique and keywords are not deduped;
    /// both are left to whoever authors the catalog.
    pub fn new(topics: Vec<TopicRecord>) -> Result<Self> {
        let mut categories = BTreeMap::new();
        for (index, topic) in topics.iter().enumerate() {
            check_topic(index, topic)?;
            *categories.entry(topic.category.clone()).or_insert(0) += 1;
        }
        Ok(Self { topics, categories })
    }

    /// The default catalog embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from TOML text (`[[topic]]` tables).
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        parse_toml(raw, None)
    }

    /// Parse a catalog from a JSON array of topic records.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        parse_json(raw, None)
    }

    /// Load a catalog file. `.json` files are parsed as JSON, anything else
    /// as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::CatalogRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let catalog = if is_json(path) {
            parse_json(&raw, Some(path))?
        } else {
            parse_toml(&raw, Some(path))?
        };

        tracing::debug!(
            path = %path.display(),
            topics = catalog.len(),
            categories = catalog.categories.len(),
            "Loaded topic catalog"
        );
        Ok(catalog)
    }

    /// Load several catalog files and concatenate them in the given order.
    ///
    /// Topics are not deduplicated across files.
    pub fn load_all(paths: &[PathBuf]) -> Result<Self> {
        let mut topics = Vec::new();
        for path in paths {
            topics.extend(Self::load(path)?.topics);
        }
        Self::new(topics)
    }

    /// All topics in catalog order.
    pub fn topics(&self) -> &[TopicRecord] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Categories with the number of topics in each, ordered by name.
    pub fn categories(&self) -> &BTreeMap<String, usize> {
        &self.categories
    }

    /// First topic whose name matches `name`, ignoring case.
    pub fn find(&self, name: &str) -> Option<&TopicRecord> {
        let wanted = name.trim().to_lowercase();
        self.topics.iter().find(|t| t.name.to_lowercase() == wanted)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn parse_toml(raw: &str, origin: Option<&Path>) -> Result<TopicCatalog> {
    let file: CatalogFile = toml::from_str(raw).map_err(|e| Error::CatalogParse {
        origin: origin.map(Path::to_path_buf),
        source: e,
    })?;
    TopicCatalog::new(file.topics)
}

fn parse_json(raw: &str, origin: Option<&Path>) -> Result<TopicCatalog> {
    let topics: Vec<TopicRecord> = serde_json::from_str(raw).map_err(|e| Error::CatalogJson {
        origin: origin.map(Path::to_path_buf),
        source: e,
    })?;
    TopicCatalog::new(topics)
}

/// Reject records search cannot handle sensibly.
///
/// An empty keyword would satisfy the "query contains keyword" rule for
/// every query, so it is refused along with empty required fields.
fn check_topic(index: usize, topic: &TopicRecord) -> Result<()> {
    let required = [
        ("name", &topic.name),
        ("category", &topic.category),
        ("difficulty", &topic.difficulty),
        ("description", &topic.description),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(Error::InvalidTopic {
                index,
                reason: format!("{field} must not be empty"),
            });
        }
    }

    if let Some(pos) = topic.keywords.iter().position(|k| k.trim().is_empty()) {
        return Err(Error::InvalidTopic {
            index,
            reason: format!("keyword {pos} of '{}' is empty", topic.name),
        });
    }

    Ok(())
}
