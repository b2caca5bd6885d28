use std::time::Duration;

use clap::Parser;

use keepsake::{cli, config, http, serve};

/// Wait for the first Ctrl+C (graceful shutdown).
/// A second Ctrl+C while requests drain exits immediately.
async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nkeepsake: forced exit");
            std::process::exit(1);
        }
    });
}

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let file_config = config::find_config_file(args.config.as_deref())
        .and_then(|path| match config::load_config(&path) {
            Ok(cfg) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", path.display(), e);
                None
            }
        });

    let config = config::Config::resolve(file_config, &args);

    // A missing static root only means empty playlists and a placeholder gallery.
    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} not found -- pages will render without music or photos",
            config.static_dir.display()
        );
    }

    tracing::info!(
        "keepsake {} \"{}\" serving {}",
        env!("GIT_VERSION"),
        config.title,
        config.static_dir.display()
    );

    let state = http::state::AppState {
        static_root: config.static_dir.clone(),
        site_title: config.title.clone(),
        placeholder: config.placeholder.clone(),
    };
    let app = http::build_router(state);

    let listeners = if config.localhost {
        serve::bind_localhost(config.port).await
    } else {
        serve::bind_dual_stack(config.port).await
    };
    let listeners = listeners.unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    for listener in &listeners {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("Listening on http://{}", addr);
        }
    }

    let (shutdown_tx, _) = tokio::sync::broadcast::channel::<()>(4);
    let servers = serve::spawn_servers(listeners, app, &shutdown_tx);

    wait_for_shutdown().await;
    tracing::info!("Shutting down...");
    let _ = shutdown_tx.send(());

    let drained = serve::join_servers(servers);
    if tokio::time::timeout(Duration::from_secs(5), drained).await.is_err() {
        tracing::warn!("Requests still in flight after 5s, exiting anyway");
    }
    tracing::info!("Goodbye.");
}
