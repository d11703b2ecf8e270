//! SIGINT/SIGTERM forwarding
//!
//! The TUI turns a signal into `Message::Quit` so the loop exits through the
//! normal quit path. Headless mode has no message loop and flips the shutdown
//! watch directly, which cancels the step in flight.

use tokio::sync::{mpsc, watch};

use ankillm_core::prelude::*;

use crate::message::Message;

/// Where a received signal is delivered
#[derive(Debug, Clone)]
pub enum SignalTarget {
    /// Interactive session: queue a quit message
    Quit(mpsc::Sender<Message>),
    /// Headless run: raise the shutdown flag
    Shutdown(watch::Sender<bool>),
}

impl SignalTarget {
    async fn deliver(self) {
        match self {
            SignalTarget::Quit(tx) => {
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Message channel closed before quit could be delivered");
                }
            }
            SignalTarget::Shutdown(tx) => {
                if tx.send(true).is_err() {
                    debug!("No shutdown receivers left");
                }
            }
        }
    }
}

/// Signal that ended the wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Received {
    Interrupt,
    Terminate,
}

/// Forward the first termination signal to `target`.
///
/// If the handlers cannot be installed the failure is logged and no signal
/// is ever forwarded; the quit key still works.
pub fn forward_signals(target: SignalTarget) {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(received) => {
                info!("{:?} received, shutting down", received);
                target.deliver().await;
            }
            Err(e) => warn!("{}", e),
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<Received> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt()).map_err(|e| Error::signal("SIGINT", e))?;
    let mut terminate =
        signal(SignalKind::terminate()).map_err(|e| Error::signal("SIGTERM", e))?;

    Ok(tokio::select! {
        _ = interrupt.recv() => Received::Interrupt,
        _ = terminate.recv() => Received::Terminate,
    })
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<Received> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::signal("Ctrl+C", e))?;
    Ok(Received::Interrupt)
}
