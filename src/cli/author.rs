use std::process::ExitCode;

use topic_search::validate;

use crate::ValidateArgs;

/// Run the `validate` subcommand.
pub(crate) fn run_validate(args: ValidateArgs) -> ExitCode {
    let path = &args.path;
    println!("Validating {} ...\n", path.display());

    let result = match validate::validate_catalog(path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Validation failed: {e}");
            return ExitCode::from(1);
        }
    };

    let catalog = &result.catalog;
    println!("  topics ................ {}", catalog.len());
    println!(
        "  categories ............ {}",
        catalog
            .categories()
            .iter()
            .map(|(name, count)| format!("{name} ({count})"))
            .collect::<Vec<_>>()
            .join(", ")
    );

    if !result.warnings.is_empty() {
        println!();
        for w in &result.warnings {
            tracing::warn!(path = %path.display(), "{w}");
            println!("  warning: {w}");
        }
    }

    println!("\nValidation passed.");
    ExitCode::SUCCESS
}
