#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod cli;
pub mod logging;

use std::{io, net::SocketAddr};

use derive_more::{Display, Error};
use goqldom_playground::DeploymentMode;
use tokio::net::TcpListener;

/// Failure of the service.
#[derive(Debug, Display, Error)]
pub enum ServiceError {
    /// The listener could not be bound.
    #[display("failed to listen on `{addr}`: {source}")]
    Bind {
        /// Requested address.
        addr: String,

        /// Underlying error.
        source: io::Error,
    },

    /// The bound address could not be determined.
    #[display("failed to resolve listening address: {_0}")]
    LocalAddr(io::Error),

    /// Serving connections failed.
    #[display("something went wrong: {_0}")]
    Serve(io::Error),
}

/// Binds a TCP listener on `addr`.
pub async fn bind(addr: &str) -> Result<(TcpListener, SocketAddr), ServiceError> {
    tracing::info!("listen TCP on: {addr}");

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServiceError::Bind {
            addr: addr.to_owned(),
            source,
        })?;
    let local = listener.local_addr().map_err(ServiceError::LocalAddr)?;

    Ok((listener, local))
}

/// Serves the Playground in `mode` on `listener` until the process ends.
pub async fn serve(listener: TcpListener, mode: DeploymentMode) -> Result<(), ServiceError> {
    tracing::info!(%mode, "register playground at /");

    axum::serve(listener, goqldom_playground_axum::router(mode))
        .await
        .map_err(ServiceError::Serve)
}

/// Opens `url` in the default browser.
///
/// Failing to do so is logged, never fatal: the service keeps serving.
pub fn open_browser(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        tracing::warn!("failed to open browser on {url}: {e}");
    }
}

/// Runs the service described by `cli`.
pub async fn run(cli: cli::Cli) -> Result<(), ServiceError> {
    tracing::info!("Starting goqldom playground service...");

    let (listener, local) = bind(&cli.addr).await?;
    let url = format!("http://{local}");
    tracing::info!("Running on: {url}");
    if cli.open {
        open_browser(&url);
    }

    serve(listener, cli.mode.into()).await
}
