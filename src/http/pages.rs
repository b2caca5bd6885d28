use std::path::Path;

use axum::{extract::State, response::Html};

use crate::http::state::AppState;
use crate::http::templates;
use crate::media::{MediaDirectory, MediaKind};

/// Number of placeholder entries shown by an empty gallery.
pub const PLACEHOLDER_COUNT: usize = 6;

/// Default placeholder filename, looked up under `/static/photos`.
pub const DEFAULT_PLACEHOLDER: &str = "placeholder.jpg";

/// Audio files for the background playlist. Empty when the music folder is missing.
pub fn music_files(static_root: &Path) -> Vec<String> {
    MediaDirectory::under(static_root, MediaKind::Audio).list()
}

/// Photos for the gallery, or `PLACEHOLDER_COUNT` copies of `placeholder` when
/// none are found so the layout is never empty.
pub fn gallery_photos(static_root: &Path, placeholder: &str) -> Vec<String> {
    let photos = MediaDirectory::under(static_root, MediaKind::Image).list();
    if photos.is_empty() {
        tracing::debug!("No photos found, using {} placeholders", PLACEHOLDER_COUNT);
        return vec![placeholder.to_owned(); PLACEHOLDER_COUNT];
    }
    photos
}

/// GET / — home page.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let music = music_files(&state.static_root);
    Html(templates::render_home(&state.site_title, &music))
}

/// GET /gallery — photo grid plus the music player.
pub async fn gallery(State(state): State<AppState>) -> Html<String> {
    let photos = gallery_photos(&state.static_root, &state.placeholder);
    let music = music_files(&state.static_root);
    Html(templates::render_gallery(&state.site_title, &photos, &music))
}

/// GET /message — message page with the typing animation.
pub async fn message(State(state): State<AppState>) -> Html<String> {
    let music = music_files(&state.static_root);
    Html(templates::render_message(&state.site_title, &music))
}
