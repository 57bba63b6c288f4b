use std::path::Path;

use clap::Parser;

use craveq_rs::cli::{Cli, Command};
use craveq_rs::decoder::builtin_catalog;
use craveq_rs::error::Result;
use craveq_rs::interface::{
    display_catalog, display_craving_report, export_catalog, prompt_craving, prompt_yes_no,
    suggest_archetypes,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Decode { query, json } => cmd_decode(&query.join(" "), json),
        Command::Interactive => cmd_interactive(),
        Command::Catalog { export } => cmd_catalog(export.as_deref()),
    }
}

/// Decode one craving and print the report (or JSON).
fn cmd_decode(query: &str, json: bool) -> Result<()> {
    let record = builtin_catalog().resolve(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        display_craving_report(&record);
    }

    Ok(())
}

/// Decode cravings in a loop until the user submits an empty input.
fn cmd_interactive() -> Result<()> {
    let catalog = builtin_catalog();

    println!("CraveQ decoder - {} known craving archetypes", catalog.len());
    println!();

    while let Some(input) = prompt_craving()? {
        let hit_catalog = catalog.find(&input).is_some();
        let record = catalog.resolve(&input);

        display_craving_report(&record);

        if !hit_catalog {
            let suggestions = suggest_archetypes(catalog, &input);
            if !suggestions.is_empty() {
                println!("Closest known archetypes:");
                for (key, _) in suggestions.iter().take(3) {
                    println!("  - {}", key);
                }
                println!();
            }
        }

        if !prompt_yes_no("Decode another craving?", true)? {
            break;
        }
    }

    Ok(())
}

/// List the catalog, or export it as JSON.
fn cmd_catalog(export: Option<&Path>) -> Result<()> {
    let catalog = builtin_catalog();

    match export {
        Some(path) => {
            export_catalog(path, catalog)?;
            println!("Catalog exported to {}", path.display());
        }
        None => display_catalog(catalog),
    }

    Ok(())
}
