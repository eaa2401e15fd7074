//! `compare` subcommand: report size mismatches and missing counterparts
//! between two directory trees, keyed by path-derived identity

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::paths;

/// Path-derived identity and size of one file
#[derive(Debug)]
struct FileInfo {
    path: PathBuf,
    key: String,
    size: u64,
}

impl FileInfo {
    fn new(path: PathBuf) -> Result<Self> {
        let key = file_key(&path);
        let size = std::fs::metadata(&path)?.len();
        Ok(FileInfo { path, key, size })
    }
}

/// `artist|album|filename`, all taken from path components
fn file_key(path: &Path) -> String {
    let (artist, album, _) = paths::derive_artist_album_track(path);
    let filename = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    format!("{}|{}|{}", artist, album, filename)
}

fn index_tree(root: &Path) -> Result<HashMap<String, FileInfo>> {
    let mut index = HashMap::new();
    for path in paths::mp3_files(root) {
        let info = FileInfo::new(path)?;
        index.insert(info.key.clone(), info);
    }
    Ok(index)
}

pub fn run(source_dir: &Path, compare_dir: &Path) -> Result<()> {
    let source = index_tree(source_dir)?;
    let compare = index_tree(compare_dir)?;

    for (key, source_info) in &source {
        match compare.get(key) {
            Some(compare_info) => {
                if source_info.size != compare_info.size {
                    println!(
                        "{} size {} different than {} {}",
                        source_info.path.display(),
                        source_info.size,
                        compare_info.path.display(),
                        compare_info.size
                    );
                }
            }
            None => println!(
                "{} has no corresponding key {} in compare",
                source_info.path.display(),
                key
            ),
        }
    }

    Ok(())
}
