//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --config, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// multiselect - load, reconcile and pick options for a model
#[derive(Parser, Debug)]
#[command(name = "multiselect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./multiselect.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a model and print its options with the current selection
    Options {
        /// JSON file holding an array of objects with `id` and `name`
        #[arg(short, long)]
        source: PathBuf,

        /// Ids of the currently selected objects (comma-separated)
        #[arg(long, value_delimiter = ',')]
        selected: Vec<String>,
    },

    /// Load a model, pick options and print the resulting value
    Pick {
        /// JSON file holding an array of objects with `id` and `name`
        #[arg(short, long)]
        source: PathBuf,

        /// Ids of the currently selected objects (comma-separated)
        #[arg(long, value_delimiter = ',')]
        selected: Vec<String>,

        /// Ids to select instead of prompting (comma-separated)
        #[arg(long, value_delimiter = ',')]
        choose: Option<Vec<String>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        let cli = Cli::parse_from([
            "multiselect",
            "pick",
            "--source",
            "objects.json",
            "--selected",
            "2,3",
            "--choose",
            "1,testId",
        ]);

        match cli.command {
            Commands::Pick {
                selected, choose, ..
            } => {
                assert_eq!(selected, vec!["2", "3"]);
                assert_eq!(choose, Some(vec!["1".to_string(), "testId".to_string()]));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["multiselect", "options", "-s", "o.json", "--json", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
