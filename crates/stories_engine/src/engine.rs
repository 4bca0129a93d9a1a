use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_error, engine_info, engine_warn};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError, RequestId};

enum EngineCommand {
    Fetch { request_id: RequestId, url: String },
}

/// Runs fetches on a background tokio runtime. Every enqueued request yields
/// exactly one [`EngineEvent::FetchCompleted`], in completion order.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
    shutdown: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("Failed to start fetch runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                let token = token.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx, token).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
            shutdown,
        }
    }

    pub fn enqueue(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    /// Waits up to `timeout` for the next event. `Disconnected` means the
    /// engine thread is gone and no further events will arrive.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<EngineEvent, RecvTimeoutError> {
        let event_rx = self
            .event_rx
            .lock()
            .map_err(|_| RecvTimeoutError::Disconnected)?;
        event_rx.recv_timeout(timeout)
    }

    /// Fails every pending and future fetch with [`FailureKind::Cancelled`].
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    shutdown: CancellationToken,
) {
    match command {
        EngineCommand::Fetch { request_id, url } => {
            engine_info!("Fetch request_id={} url={}", request_id, url);
            let result = shutdown
                .run_until_cancelled(fetcher.fetch(&url))
                .await
                .unwrap_or_else(|| {
                    Err(FetchError::new(FailureKind::Cancelled, "engine shut down"))
                });
            match &result {
                Ok(response) => engine_info!(
                    "Fetch request_id={} done hits={} page={:?}",
                    request_id,
                    response.hits.len(),
                    response.page
                ),
                Err(err) => engine_warn!("Fetch request_id={} failed: {}", request_id, err),
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted {
                request_id,
                url,
                result,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recv_reports_a_dead_engine_thread() {
        let (cmd_tx, _cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();
        drop(event_tx);
        let engine = EngineHandle {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
            shutdown: CancellationToken::new(),
        };

        assert_eq!(
            engine.recv_timeout(Duration::from_secs(5)).unwrap_err(),
            RecvTimeoutError::Disconnected
        );
    }
}
