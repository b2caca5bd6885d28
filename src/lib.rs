//! Tiny personal website: home, gallery and message pages, each with a background
//! playlist discovered from a local music folder.

pub mod cli;
pub mod config;
pub mod http;
pub mod media;
pub mod serve;
