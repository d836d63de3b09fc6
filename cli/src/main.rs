//! word-ladder: shortest one-edit word ladders over a dictionary file.
//!
//! Every invocation loads the dictionary, builds the word graph, and (for
//! ladder queries) precomputes all shortest paths before answering.

mod config;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use word_ladder_core::{DictionaryFile, WordLadder};

use crate::config::Settings;

/// Word ladder queries over a dictionary
#[derive(Parser, Debug)]
#[command(name = "word-ladder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the shortest ladder between two words
    Path {
        /// Starting word
        from: String,
        /// Target word
        to: String,
    },

    /// Print the number of edits between two words (-1 if none or same word)
    Distance {
        /// Starting word
        from: String,
        /// Target word
        to: String,
    },

    /// List words within a number of edits of a word
    Neighborhood {
        /// Center word
        word: String,

        /// Maximum number of edits
        #[arg(long, default_value = "3")]
        depth: u32,
    },

    /// Rank words by number of one-edit neighbors
    Degree {
        /// How many words to show (0 = all)
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Show graph and path table statistics
    Status,
}

impl Commands {
    /// Whether the command reads the all-pairs path table.
    fn needs_paths(&self) -> bool {
        matches!(
            self,
            Commands::Path { .. } | Commands::Distance { .. } | Commands::Status
        )
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.settings.log, cli.settings.log_json);

    match run(cli) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let settings = &cli.settings;
    let path = settings.dictionary_path()?;
    let source = DictionaryFile::new(path);

    let mut ladder = WordLadder::with_config(settings.ladder_config()?);
    let added = ladder
        .populate(&source)
        .with_context(|| format!("loading dictionary {}", path.display()))?;
    debug!(added, "dictionary loaded");

    if cli.command.needs_paths() {
        ladder.precompute().context("precomputing shortest paths")?;
    }

    execute(&ladder, &cli.command, settings, &path.display().to_string())
}

fn execute(
    ladder: &WordLadder,
    command: &Commands,
    settings: &Settings,
    source: &str,
) -> Result<String> {
    let format = settings.format;
    match command {
        Commands::Path { from, to } => {
            let path = ladder.shortest_path(from, to)?;
            output::format_path(from, to, path.as_deref(), format)
        }
        Commands::Distance { from, to } => {
            let distance = ladder.shortest_distance(from, to)?;
            output::format_distance(from, to, distance, format)
        }
        Commands::Neighborhood { word, depth } => {
            let neighbors = ladder.neighborhood(word, *depth)?;
            output::format_neighborhood(word, &neighbors, format)
        }
        Commands::Degree { top } => {
            output::format_degree(&ladder.degree_centrality(*top), format)
        }
        Commands::Status => output::format_status(source, &ladder.stats(), format),
    }
}
