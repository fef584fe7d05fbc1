//! Command-line definitions.

use clap::{Args, Parser, Subcommand};
use coinfind_core::types::ListFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coinfind", about = "Prefix search over currency lists", version)]
pub struct Cli {
    /// Config file (defaults to ./coinfind.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Catalog selection shared by every subcommand.
#[derive(Args)]
pub struct Source {
    /// JSON snapshot with `crypto` and `fiat` lists
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Which list to search: crypto, fiat or all (defaults to the config value)
    #[arg(short, long)]
    pub filter: Option<ListFilter>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query and print the matching records
    Search {
        #[command(flatten)]
        source: Source,

        /// Query text; empty lists everything
        #[arg(default_value = "")]
        query: String,

        /// Maximum rows to print (overrides display.max_results, 0 = unlimited)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print index size counters
    Stats {
        #[command(flatten)]
        source: Source,
    },

    /// Read queries from stdin, one per line
    ///
    /// `:filter <crypto|fiat|all>` switches lists, `:clear` resets the query,
    /// `:quit` exits. Any other line is a query.
    Repl {
        #[command(flatten)]
        source: Source,
    },
}
