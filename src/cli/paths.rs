//! Path helpers shared by the subcommands

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively collect `.mp3` files under `dir`, sorted by file name
pub fn mp3_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_mp3(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(error) => tracing::warn!("walk error under {}: {}", dir.display(), error),
        }
    }
    files
}

/// Case-insensitive `.mp3` extension check
pub fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

/// Derive artist/album/track from `{artist}/{album}/{track}.mp3` components
///
/// Components that don't exist (short paths) come back empty.
pub fn derive_artist_album_track(path: &Path) -> (String, String, String) {
    let component = |p: Option<&Path>| -> String {
        p.and_then(Path::file_name)
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string()
    };

    let track = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string();
    let album_dir = path.parent();
    let album = component(album_dir);
    let artist = component(album_dir.and_then(Path::parent));

    (artist, album, track)
}
