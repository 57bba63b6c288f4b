use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CraveQ — decode a food craving into a healthier whole-food reconstruction.
#[derive(Parser, Debug)]
#[command(name = "craveq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a single craving and print the substitution report.
    Decode {
        /// The craving, free text (multiple words allowed).
        #[arg(required = true)]
        query: Vec<String>,

        /// Emit the record as pretty JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },

    /// Decode cravings interactively until an empty input.
    Interactive,

    /// List the built-in craving catalog.
    Catalog {
        /// Write the catalog as pretty JSON to this path instead of listing it.
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
