//! Background joke worker
//!
//! Owns a tokio runtime so the UI thread never awaits. Each request is tagged
//! with the press cycle it belongs to, and the outcome comes back over a
//! channel that the UI drains once per frame.

use super::fetcher::{JokeFetcher, Transport};
use crate::{JokeError, Result};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{info, warn};
use uuid::Uuid;

/// Events emitted by the joke worker
#[derive(Clone, Debug, PartialEq)]
pub enum JokeEvent {
    /// A fetch finished, successfully or not
    Settled {
        cycle: Uuid,
        outcome: std::result::Result<String, JokeError>,
    },
}

/// Callback run after every event, used to wake the UI
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// Runs joke fetches off the UI thread
pub struct JokeWorker<T: Transport> {
    runtime: Runtime,
    fetcher: Arc<JokeFetcher<T>>,
    event_tx: Sender<JokeEvent>,
    event_rx: Receiver<JokeEvent>,
    repaint: Option<RepaintHook>,
}

impl<T: Transport> JokeWorker<T> {
    /// Create a worker with its own runtime
    pub fn new(fetcher: JokeFetcher<T>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("joke-worker")
            .enable_all()
            .build()?;

        let (event_tx, event_rx) = bounded(16);

        Ok(Self {
            runtime,
            fetcher: Arc::new(fetcher),
            event_tx,
            event_rx,
            repaint: None,
        })
    }

    /// Run `hook` whenever an event is posted
    pub fn with_repaint(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.repaint = Some(Arc::new(hook));
        self
    }

    pub fn set_repaint(&mut self, hook: RepaintHook) {
        self.repaint = Some(hook);
    }

    pub fn fetcher(&self) -> &JokeFetcher<T> {
        &self.fetcher
    }

    /// Start fetching a joke for `cycle`
    pub fn request(&self, cycle: Uuid) {
        info!("[JOKE] Fetch started for cycle {}", cycle);

        let fetcher = Arc::clone(&self.fetcher);
        let event_tx = self.event_tx.clone();
        let repaint = self.repaint.clone();

        self.runtime.spawn(async move {
            let outcome = fetcher.fetch().await;
            match &outcome {
                Ok(joke) => info!("[JOKE] Cycle {} settled with {} chars", cycle, joke.len()),
                Err(e) => warn!(
                    "[JOKE] Cycle {} failed (recoverable: {}): {}",
                    cycle,
                    e.is_recoverable(),
                    e
                ),
            }

            match event_tx.try_send(JokeEvent::Settled { cycle, outcome }) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    warn!("[JOKE] Event queue full, dropping cycle {}", cycle)
                }
                Err(TrySendError::Disconnected(_)) => return,
            }

            if let Some(repaint) = repaint {
                repaint();
            }
        });
    }

    /// Next pending event, if any. Never blocks.
    pub fn try_recv(&self) -> Option<JokeEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Receiver for events (for callers that want to block or select)
    pub fn events(&self) -> Receiver<JokeEvent> {
        self.event_rx.clone()
    }
}
