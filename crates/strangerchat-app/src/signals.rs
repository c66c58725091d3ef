//! OS signal handling for graceful shutdown

use strangerchat_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Spawn a task that turns the first termination signal into `Message::Quit`
///
/// The returned handle lets the engine stop listening on shutdown.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                info!("Received {}, quitting", name);
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

/// Wait for a termination signal and return its name
async fn wait_for_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let listen = |kind: SignalKind, name: &str| {
            signal(kind).map_err(|e| Error::terminal(format!("Failed to listen for {}: {}", name, e)))
        };
        let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
        let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;
        let mut sighup = listen(SignalKind::hangup(), "SIGHUP")?;

        let name = tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
            _ = sighup.recv() => "SIGHUP",
        };
        Ok(name)
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        Ok("Ctrl+C")
    }
}
