//! CLI module for Svar.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Svar - Grounded Transcript Q&A
///
/// Answers questions about video-production practices from timestamped
/// transcripts, citing the exact video and timestamp behind every claim.
/// The name "Svar" comes from the Norwegian/Scandinavian word for "answer."
#[derive(Parser, Debug)]
#[command(name = "svar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a question and get a grounded, cited answer
    Ask {
        /// The question to ask
        question: String,

        /// Chat model to use for answer generation
        #[arg(short, long)]
        model: Option<String>,

        /// Number of top-ranked segments used as evidence
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },

    /// Ask questions interactively (each question answered independently)
    Chat {
        /// Chat model to use for answer generation
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Show the segments a question would retrieve, with scores
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// List indexed transcript sources
    List,

    /// Check configuration and environment
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
