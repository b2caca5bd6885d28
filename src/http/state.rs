use std::path::PathBuf;

/// Shared application state injected into all route handlers via axum::extract::State.
/// Read-only configuration; nothing discovered on disk is kept between requests.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Directory served under `/static`, holding `music/` and `photos/`.
    pub static_root: PathBuf,
    /// Site title shown in the page header and `<title>`.
    pub site_title: String,
    /// Filename repeated in the gallery when no photos are found.
    pub placeholder: String,
}
