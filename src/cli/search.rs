use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;
use topic_search::catalog::TopicRecord;
use topic_search::{filter, search, suggest};

use super::{filtered, load_catalog, print_topics};
use crate::{CategoriesArgs, InfoArgs, ListArgs, SearchArgs, SuggestArgs};

/// Run the `search` subcommand.
pub(crate) fn run_search(args: SearchArgs) -> ExitCode {
    let (catalog, cli_config) = match load_catalog(&args.catalogs) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let mut options = cli_config.search.options();
    if let Some(limit) = args.limit {
        options.limit = limit;
    }
    if let Some(min_length) = args.min_length {
        options.min_query_length = min_length;
    }

    // Structured filters narrow the catalog before ranking, so the limit
    // applies within the filtered set
    let narrowed: Vec<TopicRecord> = filtered(
        catalog.topics(),
        args.category.as_deref(),
        args.difficulty.as_deref(),
    )
    .into_iter()
    .cloned()
    .collect();

    let results = search::search(&args.query, &narrowed, &options);

    let too_short = args.query.trim().chars().count() < options.min_query_length;
    if results.is_empty() && too_short && !args.json {
        println!(
            "Query too short: enter at least {} character{}.",
            options.min_query_length,
            if options.min_query_length == 1 { "" } else { "s" }
        );
        return ExitCode::SUCCESS;
    }

    finish(print_topics(&results, args.json))
}

/// Run the `suggest` subcommand.
pub(crate) fn run_suggest(args: SuggestArgs) -> ExitCode {
    let (catalog, cli_config) = match load_catalog(&args.catalogs) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let count = args.count.unwrap_or(cli_config.suggestions.count);
    let picked = match args.seed {
        Some(seed) => suggest::sample(catalog.topics(), count, &mut StdRng::seed_from_u64(seed)),
        None => suggest::suggest(catalog.topics(), count),
    };

    finish(print_topics(&picked, args.json))
}

/// Run the `categories` subcommand.
pub(crate) fn run_categories(args: CategoriesArgs) -> ExitCode {
    let (catalog, _cli_config) = match load_catalog(&args.catalogs) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let categories = catalog.categories();
    if categories.is_empty() {
        println!("No categories found.");
        return ExitCode::SUCCESS;
    }

    let total: usize = categories.values().sum();
    println!(
        "{} categor{} ({total} topic{}):\n",
        categories.len(),
        if categories.len() == 1 { "y" } else { "ies" },
        if total == 1 { "" } else { "s" },
    );
    for (name, count) in categories {
        println!("  {name} ({count})");
    }

    ExitCode::SUCCESS
}

/// Run the `list` subcommand.
pub(crate) fn run_list(args: ListArgs) -> ExitCode {
    let (catalog, _cli_config) = match load_catalog(&args.catalogs) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let topics = filtered(
        catalog.topics(),
        args.category.as_deref(),
        args.difficulty.as_deref(),
    );

    finish(print_topics(&topics, args.json))
}

/// Run the `info` subcommand.
pub(crate) fn run_info(args: InfoArgs) -> ExitCode {
    let (catalog, _cli_config) = match load_catalog(&args.catalogs) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let topic = match catalog.find(&args.name) {
        Some(t) => t,
        None => {
            eprintln!("Error: topic '{}' not found in catalog", args.name);
            return ExitCode::from(1);
        }
    };

    println!("{}\n", topic.name);
    println!("  category .............. {}", topic.category);
    println!("  difficulty ............ {}", topic.difficulty);
    println!("  description ........... {}", topic.description);
    if !topic.keywords.is_empty() {
        println!("  keywords .............. {}", topic.keywords.join(", "));
    }

    // Same-category neighbours, for browsing
    let related: Vec<&str> = filter::by_category(catalog.topics(), &topic.category)
        .into_iter()
        .filter(|t| !std::ptr::eq(*t, topic))
        .map(|t| t.name.as_str())
        .collect();
    if !related.is_empty() {
        println!("  related ............... {}", related.join(", "));
    }

    ExitCode::SUCCESS
}

fn finish(printed: anyhow::Result<()>) -> ExitCode {
    match printed {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing output: {e:#}");
            ExitCode::from(1)
        }
    }
}
