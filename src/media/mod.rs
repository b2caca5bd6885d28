pub mod kind;
pub mod lister;

pub use kind::{MediaKind, AUDIO_EXTENSIONS, IMAGE_EXTENSIONS};
pub use lister::{list_media, MediaDirectory};
