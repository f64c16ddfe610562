use std::fs::Metadata;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// One item of a directory walk. Symlinks are never followed, so a link shows
/// up as a `File` carrying the link's own metadata.
#[derive(Debug)]
pub enum WalkEntry {
    Directory(PathBuf),
    File {
        dir: PathBuf,
        path: PathBuf,
        metadata: Metadata,
    },
    Unreadable {
        path: PathBuf,
        error: String,
    },
}

/// Lazily walks every directory under `root`, root included.
pub fn walk_tree(root: &Path) -> impl Iterator<Item = WalkEntry> {
    let root = root.to_path_buf();
    WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .map(move |item| {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.clone());
                    return WalkEntry::Unreadable {
                        path,
                        error: err.to_string(),
                    };
                }
            };

            if entry.file_type().is_dir() {
                return WalkEntry::Directory(entry.into_path());
            }

            match entry.metadata() {
                Ok(metadata) => {
                    let path = entry.into_path();
                    let dir = path
                        .parent()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.clone());
                    WalkEntry::File {
                        dir,
                        path,
                        metadata,
                    }
                }
                Err(err) => WalkEntry::Unreadable {
                    path: entry.into_path(),
                    error: err.to_string(),
                },
            }
        })
}
