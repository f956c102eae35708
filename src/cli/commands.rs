//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse a paginated Pokemon collection
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Loader configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API root, overriding the config file and POKEDEX_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the first page of a collection
    List {
        /// Collection endpoint, absolute or relative to the API root
        #[arg(long)]
        endpoint: Option<String>,

        /// Items per page
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Load the page a previous `next page` cursor points at
    More {
        /// Cursor printed by a previous `list` or `more`
        #[arg(long)]
        page: String,
    },

    /// Show one item by name
    Show {
        /// Item name (e.g. "pikachu")
        name: String,
    },

    /// Follow next-page cursors from the first page
    Crawl {
        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<usize>,
    },

    /// Show the official artwork of a random item from the first page
    Featured,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one object per line)
    Json,
    /// Human-readable output
    Pretty,
}
