//! Process signal handling for graceful shutdown.

use std::fmt;

use tokio::signal;

/// The signal that ended the serve loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => f.write_str("SIGINT"),
            ShutdownSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

#[cfg(unix)]
async fn terminate() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(err) => {
            tracing::warn!(error = %err, "SIGTERM handler unavailable");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

async fn interrupt() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::warn!(error = %err, "SIGINT handler unavailable");
        std::future::pending::<()>().await;
    }
}

/// Resolves once SIGINT or SIGTERM arrives.
pub async fn wait_for_signal() -> ShutdownSignal {
    let received = tokio::select! {
        () = interrupt() => ShutdownSignal::Interrupt,
        () = terminate() => ShutdownSignal::Terminate,
    };
    tracing::info!(signal = %received, "starting graceful shutdown");
    received
}
