//! cargo-identify CLI - a minimal host driving the Cargo identifier

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cargo_identify::core::metadata::BUILD_PHASE;
use cargo_identify::ops::{find_candidates, identify_all};
use cargo_identify::util::diagnostic::{self, suggestions, Diagnostic};
use cargo_identify::{CargoIdentifier, Config, PackageMetadata};

mod cli;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when identification hit a fatal error that has
/// already been reported.
fn run(cli: &Cli) -> Result<bool> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("cargo_identify=debug")
    } else {
        EnvFilter::new("cargo_identify=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let config = Config::load_or_default(cli.config.as_deref())?;
    let identifier = CargoIdentifier::from_config(&config);
    tracing::debug!("manifest tool: {}", identifier.inspector().program().display());

    let mut identified = Vec::new();
    for root in cli.roots() {
        let candidates = find_candidates(&root, cli.recursive, &config.scan);
        match identify_all(&identifier, &candidates) {
            Ok(packages) => identified.extend(packages),
            Err(e) => {
                diagnostic::emit(&e.to_diagnostic());
                return Ok(false);
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&identified)?);
    } else {
        for metadata in &identified {
            println!("{}", format_line(metadata));
        }
    }

    if identified.is_empty() && cli.verbose {
        let note = Diagnostic::note("no packages identified")
            .with_suggestion(suggestions::NOT_IDENTIFIED);
        diagnostic::emit(&note);
    }

    Ok(true)
}

fn format_line(metadata: &PackageMetadata) -> String {
    let deps = metadata
        .phase(BUILD_PHASE)
        .map(|deps| deps.iter().cloned().collect::<Vec<_>>().join(","))
        .unwrap_or_default();

    format!(
        "{}\t{}\t{}",
        metadata.name.as_deref().unwrap_or_default(),
        metadata.path().display(),
        deps
    )
}
