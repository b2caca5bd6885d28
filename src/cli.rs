use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "keepsake",
    about = "Tiny personal site with a photo gallery and background music from local folders",
    long_about = None,
    version = env!("GIT_VERSION"),
)]
pub struct Args {
    /// Static root holding music/, photos/, js/ and css/ [default: static]
    pub static_dir: Option<PathBuf>,

    /// HTTP port to listen on [default: 5000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Site title shown in the header and browser tab [default: Our Story]
    #[arg(short, long)]
    pub title: Option<String>,

    /// Path to TOML config file (overrides default search: ./keepsake.toml, ~/.config/keepsake/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind to localhost only (127.0.0.1) instead of all interfaces (0.0.0.0 + :::)
    #[arg(long)]
    pub localhost: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long)]
    pub debug: bool,
}
