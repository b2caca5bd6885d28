use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::media::kind::{has_recognized_extension, MediaKind};

/// A media folder paired with the kind of files it should contain.
#[derive(Debug, Clone)]
pub struct MediaDirectory {
    pub path: PathBuf,
    pub kind: MediaKind,
}

impl MediaDirectory {
    pub fn new(path: impl Into<PathBuf>, kind: MediaKind) -> Self {
        Self { path: path.into(), kind }
    }

    /// The `kind` folder below a static root, e.g. `static/music`.
    pub fn under(static_root: &Path, kind: MediaKind) -> Self {
        Self::new(kind.dir_in(static_root), kind)
    }

    pub fn list(&self) -> Vec<String> {
        list_media(&self.path, self.kind.extensions())
    }
}

/// List the filenames directly inside `dir` whose lowercased name ends with one
/// of `extensions`.
///
/// A missing or unreadable `dir` yields an empty list, never an error.
/// Matching is on the entry name alone: subdirectories are not descended into,
/// but a subdirectory or dangling symlink whose name matches is still listed.
/// Names are bare filenames in directory-listing order, which is whatever the
/// platform hands back.
pub fn list_media(dir: &Path, extensions: &[&str]) -> Vec<String> {
    if !dir.is_dir() {
        tracing::debug!("Media directory not found, listing nothing: {}", dir.display());
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            // The root itself could not be read: same outcome as a missing directory.
            Err(e) if e.depth() == 0 => {
                tracing::debug!("Cannot read media directory {}: {}", dir.display(), e);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Cannot access entry: {}", e);
                continue;
            }
        };
        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!("Skipping non UTF-8 filename in {}", dir.display());
            continue;
        };
        if has_recognized_extension(name, extensions) {
            files.push(name.to_owned());
        }
    }

    tracing::debug!("Listed {} media files in {}", files.len(), dir.display());
    files
}
