use std::path::Path;
use std::process::ExitCode;

use topic_search::config::{self, TopicsConfig};

use crate::SetupArgs;

/// Run the `setup` subcommand.
pub(crate) fn run_setup(args: SetupArgs) -> ExitCode {
    let config_path = config::config_path();

    // Check for existing config
    if config_path.exists() && !args.force {
        eprintln!(
            "Config already exists at {}\nUse --force to overwrite.",
            config_path.display()
        );
        return ExitCode::from(1);
    }

    let mut config = TopicsConfig::default();
    config.catalog.paths = args.catalog;

    let path = match config::write_config(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error writing config: {e}");
            return ExitCode::from(1);
        }
    };

    println!("Wrote {}\n", path.display());
    if let Some(content) = read_back(&path) {
        println!("{content}");
    }
    println!(
        "Next steps:\n  \
         topics suggest             # a few topics to start with\n  \
         topics search \"graphs\"     # search the catalog\n  \
         topics info Python         # see topic details"
    );

    ExitCode::SUCCESS
}

/// Read the written config back for display, warning instead of failing.
fn read_back(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Could not read back config");
            eprintln!("Warning: could not read back {}: {e}", path.display());
            None
        }
    }
}
