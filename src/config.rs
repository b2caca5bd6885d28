use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::http::pages::DEFAULT_PLACEHOLDER;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_TITLE: &str = "Our Story";

/// Settings read from `keepsake.toml`. Every key is optional and unknown keys are ignored.
#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
    pub title: Option<String>,
    pub placeholder: Option<String>,
    pub localhost: Option<bool>,
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    pub title: String,
    pub placeholder: String,
    pub localhost: bool,
}

impl Config {
    /// CLI flag wins over the config file, which wins over the default.
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        Config {
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            static_dir: args
                .static_dir
                .clone()
                .or(file.static_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            title: args
                .title
                .clone()
                .or(file.title)
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            placeholder: file
                .placeholder
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            localhost: args.localhost || file.localhost.unwrap_or(false),
        }
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("keepsake.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    let user_config = dirs::config_dir()?.join("keepsake").join("config.toml");
    user_config.exists().then_some(user_config)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
