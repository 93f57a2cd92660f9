//! Cloneable façade for feeding votes into a session.
//!
//! [`SessionHandle`] hides the channel plumbing: votes go into a bounded
//! queue the turn controller drains only while a countdown is open, events
//! come back out of the topic bus, and the latest board is readable at any
//! time without touching the controller.
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{broadcast, mpsc, watch};
use tracing::trace;

use game_core::{GameState, VoteSymbol};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic, VoteEvent};

/// Client-facing handle to interact with a running session.
#[derive(Clone)]
pub struct SessionHandle {
    vote_tx: mpsc::Sender<VoteSymbol>,
    event_bus: EventBus,
    snapshot_rx: watch::Receiver<Arc<GameState>>,
}

impl SessionHandle {
    pub(crate) fn new(
        vote_tx: mpsc::Sender<VoteSymbol>,
        event_bus: EventBus,
        snapshot_rx: watch::Receiver<Arc<GameState>>,
    ) -> Self {
        Self {
            vote_tx,
            event_bus,
            snapshot_rx,
        }
    }

    /// Submit one vote without waiting.
    ///
    /// Votes that arrive while no countdown is open are dropped by the
    /// controller, and votes that find the queue full are dropped here.
    /// Both are reported as [`crate::VoteEvent::Rejected`]. A vote never
    /// waits for queue space, so it cannot slip into a later window.
    pub fn cast_vote(&self, symbol: VoteSymbol) -> Result<()> {
        match self.vote_tx.try_send(symbol) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(symbol)) => {
                trace!(%symbol, "vote queue full, dropping vote");
                self.event_bus.publish(VoteEvent::Rejected { symbol });
                Ok(())
            }
            Err(TrySendError::Closed(_)) => Err(RuntimeError::VoteChannelClosed),
        }
    }

    /// Subscribe to events from a specific topic.
    ///
    /// ```rust,ignore
    /// let mut combat = handle.subscribe(Topic::Combat);
    /// while let Ok(event) = combat.recv().await {
    ///     // render banners, damage numbers...
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Board as of the most recent resolution.
    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.snapshot_rx.borrow())
    }

    /// Receiver that wakes on every published board.
    pub fn watch_state(&self) -> watch::Receiver<Arc<GameState>> {
        self.snapshot_rx.clone()
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
