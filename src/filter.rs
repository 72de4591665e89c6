//! Category and difficulty filters.
//!
//! Both are exact matches ignoring case and keep catalog order.

use crate::catalog::TopicRecord;

/// All topics whose category equals `category`, ignoring case.
pub fn by_category<'a>(catalog: &'a [TopicRecord], category: &str) -> Vec<&'a TopicRecord> {
    matching(catalog, category, |t| &t.category)
}

/// All topics whose difficulty equals `difficulty`, ignoring case.
pub fn by_difficulty<'a>(catalog: &'a [TopicRecord], difficulty: &str) -> Vec<&'a TopicRecord> {
    matching(catalog, difficulty, |t| &t.difficulty)
}

fn matching<'a>(
    catalog: &'a [TopicRecord],
    wanted: &str,
    field: impl Fn(&TopicRecord) -> &String,
) -> Vec<&'a TopicRecord> {
    let wanted = wanted.to_lowercase();
    catalog
        .iter()
        .filter(|t| field(*t).to_lowercase() == wanted)
        .collect()
}
