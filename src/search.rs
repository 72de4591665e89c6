//! Topic search: additive rule scoring over the topic catalog.
//!
//! Every topic is scored independently against the normalized query, topics
//! scoring zero are dropped, the rest are stable-sorted by score (catalog
//! order breaks ties) and truncated. Scores never leave this module attached
//! to a record.

use crate::catalog::TopicRecord;

/// Exact (case-insensitive) name match.
const EXACT_NAME: u32 = 100;
/// Name starts with the query.
const NAME_PREFIX: u32 = 50;
/// Name contains the query.
const NAME_SUBSTRING: u32 = 30;
/// Some keyword contains the query, or the query contains some keyword.
const KEYWORD: u32 = 20;
const CATEGORY: u32 = 15;
const DESCRIPTION: u32 = 10;
/// Per query word found in the name.
const WORD_IN_NAME: u32 = 5;
/// Per query word, per keyword containing it.
const WORD_IN_KEYWORD: u32 = 3;

/// Query words must be longer than this to earn word bonuses.
const MIN_WORD_LEN: usize = 2;

/// Tunables for a single search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results returned.
    pub limit: usize,
    /// Queries whose trimmed length is below this return nothing.
    pub min_query_length: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 8,
            min_query_length: 2,
        }
    }
}

impl SearchOptions {
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn min_query_length(mut self, min_query_length: usize) -> Self {
        self.min_query_length = min_query_length;
        self
    }
}

/// A topic paired with its score for the duration of one search.
#[derive(Debug, Clone, Copy)]
struct ScoredTopic<'a> {
    topic: &'a TopicRecord,
    score: u32,
}

/// Search `catalog` for `query`, returning at most `options.limit` topics,
/// best match first.
///
/// Queries that are empty, or whose trimmed length is below
/// `options.min_query_length`, return an empty list without scoring. With a
/// minimum of 0 a whitespace-only query normalizes to `""`, which every topic
/// name starts with, so every topic matches. Never fails for any input string.
pub fn search<'a>(
    query: &str,
    catalog: &'a [TopicRecord],
    options: &SearchOptions,
) -> Vec<&'a TopicRecord> {
    if query.is_empty() || query.trim().chars().count() < options.min_query_length {
        return Vec::new();
    }

    let normalized = query.trim().to_lowercase();

    let mut scored: Vec<ScoredTopic<'a>> = catalog
        .iter()
        .map(|topic| ScoredTopic {
            topic,
            score: score_normalized(topic, &normalized),
        })
        .filter(|s| s.score > 0)
        .collect();

    let matched = scored.len();

    // `sort_by` is stable: equal scores keep catalog order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(options.limit);

    tracing::debug!(
        query = %normalized,
        matched,
        returned = scored.len(),
        "Topic search"
    );

    scored.into_iter().map(|s| s.topic).collect()
}

/// Score a single topic against a raw query.
///
/// The query is trimmed and lower-cased first, exactly as [`search`] does.
/// Returns 0 when nothing matches.
pub fn score(topic: &TopicRecord, query: &str) -> u32 {
    score_normalized(topic, &query.trim().to_lowercase())
}

fn score_normalized(topic: &TopicRecord, query: &str) -> u32 {
    let name = topic.name.to_lowercase();
    let keywords: Vec<String> = topic.keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut score = 0;

    if name == query {
        score += EXACT_NAME;
    } else if name.starts_with(query) {
        score += NAME_PREFIX;
    } else if name.contains(query) {
        score += NAME_SUBSTRING;
    }

    if keywords
        .iter()
        .any(|k| k.contains(query) || query.contains(k.as_str()))
    {
        score += KEYWORD;
    }

    if topic.category.to_lowercase().contains(query) {
        score += CATEGORY;
    }

    if topic.description.to_lowercase().contains(query) {
        score += DESCRIPTION;
    }

    for word in query
        .split(' ')
        .filter(|w| w.chars().count() > MIN_WORD_LEN)
    {
        if name.contains(word) {
            score += WORD_IN_NAME;
        }
        let hits = keywords.iter().filter(|k| k.contains(word)).count() as u32;
        score += hits * WORD_IN_KEYWORD;
    }

    score
}
