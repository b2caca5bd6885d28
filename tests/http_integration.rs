use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use keepsake::http::{build_router, state::AppState};

const TEST_TITLE: &str = "Test Site";

fn make_app(static_root: &Path) -> axum::Router {
    let state = AppState {
        static_root: static_root.to_path_buf(),
        site_title: TEST_TITLE.to_string(),
        placeholder: "placeholder.jpg".to_string(),
    };
    build_router(state)
}

fn touch(dir: &Path, name: &str, contents: &[u8]) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ── page routes ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn pages_return_html() {
    let root = TempDir::new().unwrap();
    for uri in ["/", "/gallery", "/message"] {
        let response = get(make_app(root.path()), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "status for {uri}");
        let ct = response.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(ct.starts_with("text/html"), "Expected text/html for {uri}, got: {ct}");
        let text = body_text(response).await;
        assert!(text.contains(TEST_TITLE), "Expected site title on {uri}:\n{text}");
    }
}

#[tokio::test]
async fn home_lists_music_files() {
    let root = TempDir::new().unwrap();
    let music = root.path().join("music");
    touch(&music, "a.mp3", b"");
    touch(&music, "b.MP4", b"");
    touch(&music, "c.txt", b"");

    let text = body_text(get(make_app(root.path()), "/").await).await;
    assert!(text.contains("/static/music/a.mp3"));
    assert!(text.contains("/static/music/b.MP4"));
    assert!(!text.contains("c.txt"));
}

#[tokio::test]
async fn gallery_without_photos_shows_six_placeholders() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("music"), "song.ogg", b"");

    let text = body_text(get(make_app(root.path()), "/gallery").await).await;
    assert_eq!(text.matches(r#"src="/static/photos/placeholder.jpg""#).count(), 6, "{text}");
    assert!(text.contains("/static/music/song.ogg"), "music must still be listed:\n{text}");
}

#[tokio::test]
async fn gallery_lists_discovered_photos() {
    let root = TempDir::new().unwrap();
    let photos = root.path().join("photos");
    touch(&photos, "beach.JPG", b"");
    touch(&photos, "dinner.png", b"");

    let text = body_text(get(make_app(root.path()), "/gallery").await).await;
    assert_eq!(text.matches(r#"class="photo-card""#).count(), 2);
    assert!(text.contains("/static/photos/beach.JPG"));
    assert!(text.contains("/static/photos/dinner.png"));
    assert!(!text.contains("placeholder.jpg"));
}

#[tokio::test]
async fn message_page_has_player_even_without_static_root() {
    let response = get(make_app(Path::new("/nonexistent/static/root")), "/message").await;
    assert_eq!(response.status(), StatusCode::OK);
    let text = body_text(response).await;
    assert!(text.contains("const playlist = [];"));
}

#[tokio::test]
async fn listing_reflects_changes_between_requests() {
    let root = TempDir::new().unwrap();
    let music = root.path().join("music");
    let app = make_app(root.path());

    let before = body_text(get(app.clone(), "/").await).await;
    assert!(!before.contains("late.wav"));

    touch(&music, "late.wav", b"");
    let after = body_text(get(app, "/").await).await;
    assert!(after.contains("/static/music/late.wav"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let root = TempDir::new().unwrap();
    let response = get(make_app(root.path()), "/admin").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ── /static ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn static_script_is_served() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("js"), "script.js", b"function toggleMusic() {}");

    let response = get(make_app(root.path()), "/static/js/script.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "function toggleMusic() {}");
}

#[tokio::test]
async fn static_music_file_is_served_by_encoded_name() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("music"), "our song.mp3", b"ID3");

    let response = get(make_app(root.path()), "/static/music/our%20song.mp3").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ID3");
}

#[tokio::test]
async fn missing_static_file_is_404() {
    let root = TempDir::new().unwrap();
    let response = get(make_app(root.path()), "/static/photos/placeholder.jpg").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ── bundled client assets ────────────────────────────────────────────────────

fn bundled_static_root() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("static")
}

#[tokio::test]
async fn bundled_script_defines_page_handlers() {
    let response = get(make_app(&bundled_static_root()), "/static/js/script.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    let script = body_text(response).await;
    for name in [
        "function toggleMusic",
        "function typeWriter",
        "function showSurprise",
        "function closeSurprise",
        "function openPhotoModal",
        "function closePhotoModal",
        "function navigatePhoto",
        "data-message",
        "localStorage",
    ] {
        assert!(script.contains(name), "script.js is missing {name}");
    }
}

#[tokio::test]
async fn bundled_stylesheet_is_served() {
    let response = get(make_app(&bundled_static_root()), "/static/css/style.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    let css = body_text(response).await;
    assert!(css.contains(".modal.show"));
}

#[tokio::test]
async fn message_page_text_is_served() {
    let text = body_text(get(make_app(&bundled_static_root()), "/message").await).await;
    assert!(text.contains("Thank you for all of it.</p>"), "{text}");
    assert!(text.contains(r#"id="surpriseModal""#));
}
