//! Suggested topics for an empty search box.
//!
//! A suggestion set is the whole catalog shuffled, cut down to `count`.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::TopicRecord;

/// Default number of suggestions shown on a cold start.
pub const DEFAULT_SUGGESTIONS: usize = 6;

/// Shuffle the catalog with `rng` and return the first `count` topics.
///
/// Returns the whole (shuffled) catalog when `count` exceeds its size. Never
/// repeats a topic.
pub fn sample<'a, R>(
    catalog: &'a [TopicRecord],
    count: usize,
    rng: &mut R,
) -> Vec<&'a TopicRecord>
where
    R: Rng + ?Sized,
{
    let mut topics: Vec<&TopicRecord> = catalog.iter().collect();
    topics.shuffle(rng);
    topics.truncate(count);
    topics
}

/// [`sample`] with the thread-local generator.
pub fn suggest(catalog: &[TopicRecord], count: usize) -> Vec<&TopicRecord> {
    sample(catalog, count, &mut rand::thread_rng())
}
