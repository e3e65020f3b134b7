//! CLI argument definitions for Vessel.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "vessel",
    version,
    about = "Decide which packages to inline into a server bundle",
    long_about = "Vessel walks the installed node_modules tree and computes the transitive \
                  closure of runtime dependencies for a set of packages, so a bundler can \
                  inline them instead of leaving them as external imports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if started in <DIR>
    #[arg(short = 'C', long = "dir", global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the packages to inline: the given packages and all their dependencies
    Bundle {
        /// Package names (defaults to `server-dependencies-to-bundle` from vessel.toml)
        packages: Vec<String>,
        /// Also start from every dependency of the app's package.json
        #[arg(long)]
        app: bool,
        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// List the app's own runtime dependencies
    AppDeps {
        /// Print a JSON object instead of one entry per line
        #[arg(long)]
        json: bool,
    },
}

/// Parse CLI arguments from `std::env::args`.
pub fn parse() -> Cli {
    Cli::parse()
}
