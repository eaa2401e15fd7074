mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "id3_parser")]
#[command(about = "Walk MP3 trees and decode ID3v2.3 tags", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk directories and print decoded ID3v2.3 frames
    Walk {
        /// The directories to traverse
        #[arg(required = true)]
        directories: Vec<PathBuf>,
        /// Derive artist/album/track from the file path
        #[arg(long)]
        aatpath: bool,
        /// Print a hex dump of raw tag and frame bytes
        #[arg(long)]
        hexdump: bool,
        /// Print tag and frame structural headers
        #[arg(long)]
        print_headers: bool,
    },
    /// Parse files and print their tags as JSON
    Dump {
        /// Files or directories to parse
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Compare two directory trees by artist/album/filename key
    Compare {
        /// Source directory root for comparison
        source_dir: PathBuf,
        /// Directory root to which to compare
        compare_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Walk {
            directories,
            aatpath,
            hexdump,
            print_headers,
        } => cli::walk::run(&directories, aatpath, hexdump, print_headers),
        Commands::Dump { paths, pretty } => cli::dump::run(&paths, pretty),
        Commands::Compare {
            source_dir,
            compare_dir,
        } => cli::compare::run(&source_dir, &compare_dir),
    }
}
