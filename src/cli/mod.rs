pub(crate) mod author;
pub(crate) mod search;
pub(crate) mod setup;

use anyhow::Context;
use topic_search::catalog::{TopicCatalog, TopicRecord};
use topic_search::config::{self, TopicsConfig};
use topic_search::filter;

use crate::CatalogArgs;

/// Load the config and the catalog a subcommand should run against.
///
/// Priority: `--catalog` flags > config `[catalog] paths` > built-in catalog.
pub(crate) fn load_catalog(args: &CatalogArgs) -> anyhow::Result<(TopicCatalog, TopicsConfig)> {
    let cli_config = config::load_config().context("Error loading config")?;

    let paths = if !args.catalog.is_empty() {
        &args.catalog
    } else {
        &cli_config.catalog.paths
    };

    let catalog = if paths.is_empty() {
        TopicCatalog::builtin().context("Error loading built-in catalog")?
    } else {
        TopicCatalog::load_all(paths).context("Error loading catalog")?
    };

    tracing::debug!(topics = catalog.len(), "Catalog ready");
    Ok((catalog, cli_config))
}

/// Apply the optional category and difficulty filters, keeping catalog order.
pub(crate) fn filtered<'a>(
    topics: &'a [TopicRecord],
    category: Option<&str>,
    difficulty: Option<&str>,
) -> Vec<&'a TopicRecord> {
    let mut selected: Vec<&TopicRecord> = match category {
        Some(cat) => filter::by_category(topics, cat),
        None => topics.iter().collect(),
    };
    if let Some(difficulty) = difficulty {
        let wanted = filter::by_difficulty(topics, difficulty);
        selected.retain(|t| wanted.iter().any(|w| std::ptr::eq(*w, *t)));
    }
    selected
}

/// Print topics in the human-readable list format, or as JSON.
pub(crate) fn print_topics(topics: &[&TopicRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(topics)?);
        return Ok(());
    }

    if topics.is_empty() {
        println!("No topics found.");
        return Ok(());
    }

    println!(
        "Found {} topic{}:\n",
        topics.len(),
        if topics.len() == 1 { "" } else { "s" }
    );
    for t in topics {
        println!("  {} [{}, {}]", t.name, t.category, t.difficulty);
        println!("    {}", t.description);
        if !t.keywords.is_empty() {
            println!("    keywords: {}", t.keywords.join(", "));
        }
        println!();
    }
    Ok(())
}
