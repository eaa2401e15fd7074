//! `walk` subcommand: traverse directories and print decoded tags

use std::path::PathBuf;

use anyhow::Result;
use id3_parser::TagWalker;
use tracing::{debug, warn};

use super::{paths, printer::Id3Printer};

pub fn run(directories: &[PathBuf], aatpath: bool, hexdump: bool, print_headers: bool) -> Result<()> {
    let mut printer = Id3Printer::new(aatpath, hexdump, print_headers);

    for directory in directories {
        if !directory.is_dir() {
            warn!("{} is not a directory", directory.display());
            continue;
        }

        for path in paths::mp3_files(directory) {
            let path = path.to_string_lossy();
            if let Err(error) = TagWalker::parse_path(&path, &mut printer) {
                // Already surfaced through the printer's diagnostic channel;
                // each file's failure is isolated and the walk continues.
                debug!("{}: {}", path, error);
            }
        }
    }

    Ok(())
}
