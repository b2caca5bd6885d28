use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("listener setup failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Listener on 127.0.0.1 only.
pub async fn bind_localhost(port: u16) -> Result<Vec<TcpListener>, ServeError> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    Ok(vec![listener])
}

/// Listeners on every interface: 0.0.0.0 plus `::` when the host has IPv6.
///
/// The IPv6 socket is created with IPV6_V6ONLY so both binds succeed on Linux,
/// where a `::` socket would otherwise also claim the IPv4 port. Failing to get
/// the IPv6 listener is logged and the server carries on with IPv4 alone.
pub async fn bind_dual_stack(port: u16) -> Result<Vec<TcpListener>, ServeError> {
    let v4_addr = SocketAddr::from(([0, 0, 0, 0], port));
    let v4 = TcpListener::bind(v4_addr)
        .await
        .map_err(|source| ServeError::Bind { addr: v4_addr, source })?;

    match bind_v6_only(port) {
        Ok(v6) => Ok(vec![v4, v6]),
        Err(e) => {
            tracing::warn!("IPv6 listener unavailable, serving IPv4 only: {}", e);
            Ok(vec![v4])
        }
    }
}

fn bind_v6_only(port: u16) -> Result<TcpListener, ServeError> {
    use socket2::{Domain, Protocol, Socket, Type};

    let addr = SocketAddr::from(([0u16; 8], port));
    let socket = Socket::new(Domain::IPV6, Type::STREAM, Some(Protocol::TCP))?;
    if let Err(e) = socket.set_only_v6(true) {
        tracing::warn!("Could not set IPV6_V6ONLY: {} -- dual-bind may fail on Linux", e);
    }
    if let Err(e) = socket.set_reuse_address(true) {
        tracing::warn!("Could not set SO_REUSEADDR on IPv6 socket: {}", e);
    }
    socket.set_nonblocking(true)?;
    socket
        .bind(&addr.into())
        .map_err(|source| ServeError::Bind { addr, source })?;
    socket.listen(1024)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}

/// Spawn one server task per listener. Each stops accepting once `shutdown`
/// fires and lets in-flight requests drain.
///
/// Receivers are subscribed before this returns, so a shutdown sent right after
/// cannot be missed.
pub fn spawn_servers(
    listeners: Vec<TcpListener>,
    app: Router,
    shutdown: &broadcast::Sender<()>,
) -> Vec<JoinHandle<()>> {
    listeners
        .into_iter()
        .map(|listener| {
            let app = app.clone();
            let mut rx = shutdown.subscribe();
            let local = listener.local_addr().ok();
            tokio::spawn(async move {
                axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = rx.recv().await;
                    })
                    .await
                    .unwrap_or_else(|e| match local {
                        Some(addr) => tracing::error!("HTTP server error on {}: {}", addr, e),
                        None => tracing::error!("HTTP server error: {}", e),
                    });
            })
        })
        .collect()
}

/// Wait for every server task. Tasks that panicked or were cancelled are logged
/// and counted; the count is returned.
pub async fn join_servers(handles: Vec<JoinHandle<()>>) -> usize {
    let mut failed = 0;
    for handle in handles {
        if let Err(e) = handle.await {
            tracing::error!("HTTP server task failed: {}", e);
            failed += 1;
        }
    }
    failed
}
