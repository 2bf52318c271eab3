//! # Server Lifecycle
//!
//! [`Server::start`] binds a listener and serves the recipe router on a
//! background task. The returned [`RunningServer`] is the only handle to
//! that task: [`RunningServer::stop`] stops accepting connections, lets
//! in-flight requests finish, and waits for the task to exit.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::app;
use crate::config::ConfigError;
use crate::models::AppState;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind listener: {0}")]
    Bind(#[source] io::Error),

    #[error("server error: {0}")]
    Serve(#[source] io::Error),

    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Entry point for starting the service.
#[derive(Debug)]
pub struct Server;

impl Server {
    /// Binds `addr` and starts serving `state` in the background.
    ///
    /// Port `0` picks a free port; read it back with [`RunningServer::local_addr`].
    pub async fn start(
        addr: impl ToSocketAddrs,
        state: Arc<AppState>,
    ) -> Result<RunningServer, ServerError> {
        let listener = TcpListener::bind(addr).await.map_err(ServerError::Bind)?;
        let local_addr = listener.local_addr().map_err(ServerError::Bind)?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(listener, app(state))
                .with_graceful_shutdown(async move {
                    // A dropped sender counts as a stop request too.
                    let _ = shutdown_rx.await;
                })
                .await
        });

        info!(addr = %local_addr, "Server listening");

        Ok(RunningServer {
            local_addr,
            shutdown: Some(shutdown_tx),
            task,
        })
    }
}

/// Handle to a started server.
#[derive(Debug)]
pub struct RunningServer {
    local_addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<io::Result<()>>,
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL of the server, e.g. `http://127.0.0.1:8492`.
    pub fn url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stops the server and waits for in-flight requests to complete.
    pub async fn stop(mut self) -> Result<(), ServerError> {
        info!(addr = %self.local_addr, "Stopping server");

        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        match self.task.await? {
            Ok(()) => {
                info!("Server stopped");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Server exited with error");
                Err(ServerError::Serve(e))
            }
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C"),
        () = terminate => info!("Received SIGTERM"),
    }
}
