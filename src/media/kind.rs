use std::path::{Path, PathBuf};

/// Audio suffixes picked up for the background playlist.
pub const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".mp4", ".wav", ".ogg", ".m4a"];

/// Image suffixes picked up for the gallery.
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

/// The two media categories the site knows about.
///
/// Each kind owns its recognized extension set and the name of the
/// subdirectory of the static root its files live in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Image,
}

impl MediaKind {
    /// Recognized extensions, lowercase with a leading dot.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Audio => AUDIO_EXTENSIONS,
            MediaKind::Image => IMAGE_EXTENSIONS,
        }
    }

    /// Subdirectory of the static root, also the URL segment under `/static`.
    pub fn dir_name(self) -> &'static str {
        match self {
            MediaKind::Audio => "music",
            MediaKind::Image => "photos",
        }
    }

    /// Directory holding this kind's files below `static_root`.
    pub fn dir_in(self, static_root: &Path) -> PathBuf {
        static_root.join(self.dir_name())
    }

    /// Public URL of `filename` as served by the `/static` route.
    pub fn url_for(self, filename: &str) -> String {
        format!("/static/{}/{}", self.dir_name(), urlencoding::encode(filename))
    }
}

/// True when `filename`, lowercased, ends with any of `extensions`.
///
/// `extensions` are expected in lowercase. Matching is on the raw suffix, so
/// `archive.tar.mp3` counts as audio and `mp3` without a dot does not.
pub fn has_recognized_extension(filename: &str, extensions: &[&str]) -> bool {
    let lower = filename.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(&ext.to_lowercase()))
}
