use std::borrow::Cow;

use crate::media::MediaKind;

/// The three pages of the site, in navigation order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Gallery,
    Message,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Gallery, Page::Message];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Gallery => "/gallery",
            Page::Message => "/message",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Gallery => "Memories",
            Page::Message => "Message",
        }
    }
}

const MESSAGE_TEXT: &str = "Every song on this page reminds me of you, \
and every photo is a moment I would gladly live again. Thank you for all of it.";

const SURPRISE_TEXT: &str = "You are my favourite person. Always.";

/// Escape text for use in HTML content or a quoted attribute value.
pub fn html_escape(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}

/// JSON array of music URLs for the inline `playlist` script.
/// `</` is broken up so a filename can never close the surrounding `<script>`.
fn playlist_json(music_files: &[String]) -> String {
    let urls: Vec<String> = music_files
        .iter()
        .map(|f| MediaKind::Audio.url_for(f))
        .collect();
    serde_json::to_string(&urls)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/")
}

fn nav(active: Page) -> String {
    let mut links = String::new();
    for page in Page::ALL {
        let class = if page == active { r#" class="active""# } else { "" };
        links.push_str(&format!(
            r#"<a href="{href}"{class}>{label}</a>"#,
            href = page.path(),
            class = class,
            label = page.nav_label(),
        ));
    }
    format!(r#"<nav class="nav">{links}</nav>"#)
}

fn music_player(music_files: &[String]) -> String {
    let first_src = music_files
        .first()
        .map(|f| format!(r#" src="{}""#, html_escape(&MediaKind::Audio.url_for(f))))
        .unwrap_or_default();
    format!(
        r#"<div class="music-control">
  <audio id="musicPlayer" preload="auto"{first_src}></audio>
  <button type="button" class="music-btn" onclick="toggleMusic()" aria-label="Toggle music"><span id="musicIcon">🔇</span></button>
</div>
<script>const playlist = {playlist};</script>"#,
        first_src = first_src,
        playlist = playlist_json(music_files),
    )
}

fn layout(site_title: &str, page: Page, body: &str, music_files: &[String]) -> String {
    let title = html_escape(site_title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} · {page}</title>
  <link rel="stylesheet" href="/static/css/style.css">
</head>
<body class="page-{page_class}">
{nav}
<main>
{body}
</main>
{player}
<script src="/static/js/script.js"></script>
</body>
</html>
"#,
        title = title,
        page = page.nav_label(),
        page_class = page.nav_label().to_lowercase(),
        nav = nav(page),
        body = body,
        player = music_player(music_files),
    )
}

/// Home page: hero section and the background player.
pub fn render_home(site_title: &str, music_files: &[String]) -> String {
    let body = format!(
        r#"<section class="hero">
  <h1 class="hero-title fade-in">{title}</h1>
  <p class="hero-subtitle">A little corner of the internet, just for us.</p>
  <a class="primary-button fade-in-delay" href="{gallery}">See our memories</a>
</section>"#,
        title = html_escape(site_title),
        gallery = Page::Gallery.path(),
    );
    layout(site_title, Page::Home, &body, music_files)
}

/// Gallery page: one card per photo, labelled "Memory N", plus the modal viewer.
pub fn render_gallery(site_title: &str, photos: &[String], music_files: &[String]) -> String {
    let mut cards = String::new();
    for (i, photo) in photos.iter().enumerate() {
        let label = format!("Memory {}", i + 1);
        let name = html_escape(photo);
        cards.push_str(&format!(
            r#"  <div class="photo-card" onclick="openPhotoModal('{js_name}', '{label}')">
    <img class="photo-img" src="{src}" alt="{name}" loading="lazy">
    <p class="photo-label">{label}</p>
  </div>
"#,
            js_name = html_escape(&js_string_body(photo)),
            src = html_escape(&MediaKind::Image.url_for(photo)),
            name = name,
            label = label,
        ));
    }
    let body = format!(
        r#"<section class="gallery">
<h1 class="section-title">Our Memories</h1>
<div class="photo-grid">
{cards}</div>
</section>
<div id="photoModal" class="modal">
  <button type="button" class="close-modal" onclick="closePhotoModal()" aria-label="Close">&times;</button>
  <button type="button" class="modal-prev" onclick="navigatePhoto(-1)" aria-label="Previous">&#8249;</button>
  <img id="modalImage" class="modal-img" alt="">
  <p id="modalCaption" class="modal-caption"></p>
  <button type="button" class="modal-next" onclick="navigatePhoto(1)" aria-label="Next">&#8250;</button>
</div>"#
    );
    layout(site_title, Page::Gallery, &body, music_files)
}

/// Message page. The text is rendered in place and retyped client-side from
/// `data-message`; the surprise button opens a modal with confetti.
pub fn render_message(site_title: &str, music_files: &[String]) -> String {
    let body = format!(
        r#"<section class="message">
  <div class="letter-card">
    <h1 class="section-title">For You</h1>
    <p id="typedMessage" class="typed-message" data-message="{message}">{message}</p>
  </div>
  <button type="button" class="surprise-button" onclick="showSurprise()">Open your surprise</button>
</section>
<div id="surpriseModal" class="modal">
  <div class="modal-content surprise-content">
    <button type="button" class="close-modal" onclick="closeSurprise()" aria-label="Close">&times;</button>
    <h2 class="surprise-title">{surprise}</h2>
  </div>
</div>
<canvas id="confettiCanvas" class="confetti-canvas"></canvas>"#,
        message = html_escape(MESSAGE_TEXT),
        surprise = html_escape(SURPRISE_TEXT),
    );
    layout(site_title, Page::Message, &body, music_files)
}

/// Escape a value for a single-quoted JavaScript string literal.
fn js_string_body(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}
