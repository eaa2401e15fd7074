//! `dump` subcommand: print parsed tags as JSON, one document per file

use std::path::PathBuf;

use anyhow::Result;
use id3_parser::Id3Tag;
use tracing::warn;

use super::paths;

pub fn run(inputs: &[PathBuf], pretty: bool) -> Result<()> {
    for path in collect_files(inputs) {
        let path = path.to_string_lossy();
        match Id3Tag::from_path(&path) {
            Ok(tag) => {
                let json = if pretty {
                    serde_json::to_string_pretty(&tag)?
                } else {
                    serde_json::to_string(&tag)?
                };
                println!("{}", json);
            }
            Err(error) => warn!("{}: {}", path, error),
        }
    }

    Ok(())
}

/// Expand directory arguments to the `.mp3` files beneath them
fn collect_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(paths::mp3_files(input));
        } else {
            files.push(input.clone());
        }
    }
    files
}
