//! High-level session orchestrator.
//!
//! A [`Session`] owns the turn controller task and wires up the vote queue,
//! the event bus and the state snapshot channel. It is the single place the
//! board, the vote aggregator, the resolver and the enemy policy are put
//! together.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use game_core::{GameState, SessionStatus};

use crate::api::{ActionProvider, Result, RuntimeError, SessionHandle};
use crate::events::EventBus;
use crate::providers::EnemyAiProvider;
use crate::scenario::Scenario;
use crate::workers::TurnController;

/// Nominal durations handed to presentation and awaited by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Length of the vote window.
    pub countdown: Duration,
    /// Interval between countdown display updates.
    pub countdown_tick: Duration,
    /// How long the result banner stays up after the player's action.
    pub banner: Duration,
    pub player_settle: Duration,
    /// Pause before the first enemy acts.
    pub enemy_lead_in: Duration,
    pub enemy_settle: Duration,
    /// Pause before the victory or defeat panel.
    pub game_over_delay: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            countdown: Duration::from_secs(5),
            countdown_tick: Duration::from_millis(100),
            banner: Duration::from_secs(2),
            player_settle: Duration::from_secs(1),
            enemy_lead_in: Duration::from_millis(500),
            enemy_settle: Duration::from_secs(1),
            game_over_delay: Duration::from_secs(2),
        }
    }
}

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub timing: TimingConfig,
    pub vote_buffer_size: usize,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            vote_buffer_size: 256,
            event_buffer_size: 256,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SessionOutcome {
    Victory,
    Defeat,
}

impl SessionOutcome {
    /// `None` while the session is still going.
    pub fn from_status(status: SessionStatus) -> Option<Self> {
        match status {
            SessionStatus::Ongoing => None,
            SessionStatus::Victory => Some(Self::Victory),
            SessionStatus::Defeat => Some(Self::Defeat),
        }
    }
}

/// A running arena session.
///
/// Design: the session owns the controller task. [`SessionHandle`] is a
/// cloneable façade for input adapters and presenters.
pub struct Session {
    handle: SessionHandle,
    controller: JoinHandle<Result<SessionOutcome>>,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Get a cloneable handle to this session
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Waits for victory or defeat.
    ///
    /// Resolves after the game-over delay, once the outcome event has been
    /// published.
    pub async fn wait(self) -> Result<SessionOutcome> {
        drop(self.handle);
        self.controller.await.map_err(RuntimeError::WorkerJoin)?
    }

    /// Stops the controller without waiting for an outcome.
    pub fn abort(&self) {
        self.controller.abort();
    }
}

/// Builder for [`Session`] with flexible configuration.
pub struct SessionBuilder {
    config: RuntimeConfig,
    scenario: Option<Scenario>,
    state: Option<GameState>,
    enemy_provider: Option<Box<dyn ActionProvider>>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            scenario: None,
            state: None,
            enemy_provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn timing(mut self, timing: TimingConfig) -> Self {
        self.config.timing = timing;
        self
    }

    /// Arena to build the board from. Ignored if an initial state is given.
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Start from a prepared board instead of a scenario.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Replace the behavior-tree enemy policy.
    pub fn enemy_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.enemy_provider = Some(Box::new(provider));
        self
    }

    /// Validates the board and spawns the turn controller.
    ///
    /// Structural problems (no enemies, overlapping placements, a grid that
    /// disagrees with the roster) fail here, before any phase runs. Must be
    /// called from within a Tokio runtime.
    pub fn build(self) -> Result<Session> {
        let state = match self.state {
            Some(state) => state,
            None => self.scenario.unwrap_or_default().build_state()?,
        };
        state.validate()?;
        state.check_invariants()?;

        let RuntimeConfig {
            timing,
            vote_buffer_size,
            event_buffer_size,
        } = self.config;

        let (vote_tx, vote_rx) = mpsc::channel(vote_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(event_buffer_size);
        let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(state.clone()));

        let enemy_provider = self
            .enemy_provider
            .unwrap_or_else(|| Box::new(EnemyAiProvider::new()));

        let controller = TurnController::new(
            state,
            timing,
            enemy_provider,
            vote_rx,
            event_bus.clone(),
            snapshot_tx,
        );

        Ok(Session {
            handle: SessionHandle::new(vote_tx, event_bus, snapshot_rx),
            controller: tokio::spawn(controller.run()),
        })
    }
}
