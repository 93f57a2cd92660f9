//! Turn controller worker.
//!
//! Owns the authoritative [`GameState`] and the [`VoteAggregator`] and drives
//! the phase cycle until the session ends. Exactly one phase is active at a
//! time; the only suspension points are the countdown window, the banner
//! and settle waits after each resolution, and the game-over delay.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info, trace, warn};

use game_core::{
    Action, CombatResolver, EntityId, ErrorSeverity, GameError, GameState, SessionStatus,
    VoteAggregator, VoteSymbol, WindowResult,
};

use crate::api::{ActionProvider, Result, RuntimeError, TurnPhase};
use crate::events::{
    CombatEvent, EventBus, SessionEvent, StatusSnapshot, TurnEvent, VoteEvent, banner_text,
};
use crate::runtime::{SessionOutcome, TimingConfig};

/// Floor for the countdown tick; a zero period would never yield.
const MIN_TICK: Duration = Duration::from_millis(1);

pub(crate) struct TurnController {
    state: GameState,
    votes: VoteAggregator,
    phase: TurnPhase,
    timing: TimingConfig,
    enemy_provider: Box<dyn ActionProvider>,
    vote_rx: mpsc::Receiver<VoteSymbol>,
    /// False once every vote sender has been dropped.
    inbox_open: bool,
    event_bus: EventBus,
    snapshot_tx: watch::Sender<Arc<GameState>>,
}

impl TurnController {
    pub(crate) fn new(
        state: GameState,
        timing: TimingConfig,
        enemy_provider: Box<dyn ActionProvider>,
        vote_rx: mpsc::Receiver<VoteSymbol>,
        event_bus: EventBus,
        snapshot_tx: watch::Sender<Arc<GameState>>,
    ) -> Self {
        Self {
            state,
            votes: VoteAggregator::new(),
            phase: TurnPhase::Countdown {
                remaining: timing.countdown,
            },
            timing,
            enemy_provider,
            vote_rx,
            inbox_open: true,
            event_bus,
            snapshot_tx,
        }
    }

    /// Runs cycles until victory or defeat.
    pub(crate) async fn run(mut self) -> Result<SessionOutcome> {
        info!(
            enemies = self.state.roster().len(),
            countdown_ms = self.timing.countdown.as_millis() as u64,
            "turn controller started"
        );
        self.publish_status();

        loop {
            let window = self.run_countdown().await?;

            let status = self.resolve_player(window).await?;
            if let Some(outcome) = SessionOutcome::from_status(status) {
                return Ok(self.conclude(outcome).await);
            }

            let status = self.resolve_enemies().await?;
            if let Some(outcome) = SessionOutcome::from_status(status) {
                return Ok(self.conclude(outcome).await);
            }

            self.advance(TurnPhase::Countdown {
                remaining: self.timing.countdown,
            })?;
        }
    }

    // ------------------------------------------------------------------
    // Phases
    // ------------------------------------------------------------------

    async fn run_countdown(&mut self) -> Result<WindowResult> {
        self.drop_stale_votes();
        self.votes.begin_window();

        let window = self.timing.countdown;
        let tick = self.timing.countdown_tick.max(MIN_TICK);
        self.event_bus
            .publish(TurnEvent::CountdownStarted { duration: window });
        debug!(window_ms = window.as_millis() as u64, "vote window open");

        let start = Instant::now();
        let deadline = start + window;
        let expiry = time::sleep_until(deadline);
        tokio::pin!(expiry);
        let mut ticker = time::interval_at(start + tick, tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = &mut expiry => break,
                vote = self.vote_rx.recv(), if self.inbox_open => match vote {
                    Some(symbol) => self.accept_vote(symbol),
                    None => {
                        debug!("all vote senders dropped");
                        self.inbox_open = false;
                    }
                },
                _ = ticker.tick() => {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    self.event_bus.publish(TurnEvent::CountdownTick { remaining });
                }
            }
        }

        let result = self.votes.end_window()?;
        info!(
            winner = %result.winner,
            command = result.winner.command_name(),
            votes = result.tally.total(),
            "vote window closed"
        );
        self.event_bus.publish(TurnEvent::CountdownEnded {
            winner: result.winner,
            tally: result.tally,
        });
        Ok(result)
    }

    async fn resolve_player(&mut self, window: WindowResult) -> Result<SessionStatus> {
        self.advance(TurnPhase::PlayerResolution)?;

        let symbol = window.winner;
        let status = self.resolve(symbol.to_action(EntityId::PLAYER));

        let display = self.timing.banner;
        self.event_bus.publish(CombatEvent::ResultBanner {
            symbol,
            text: banner_text(symbol),
            display,
        });
        // The banner runs over the settle time.
        time::sleep(display.max(self.timing.player_settle)).await;

        Ok(status)
    }

    async fn resolve_enemies(&mut self) -> Result<SessionStatus> {
        // Enemies killed during this phase stay in the snapshot and are skipped.
        let roster = self.state.roster_ids();

        self.advance(TurnPhase::EnemyResolution { index: 0 })?;
        time::sleep(self.timing.enemy_lead_in).await;

        for (index, entity) in roster.into_iter().enumerate() {
            if index > 0 {
                self.advance(TurnPhase::EnemyResolution { index })?;
            }
            if !self.state.is_alive(entity) {
                trace!(%entity, index, "enemy gone, skipping");
                continue;
            }

            self.event_bus.publish(TurnEvent::EnemyTurnStarted { entity });
            let action = match self.enemy_provider.provide_action(entity, &self.state).await {
                Ok(action) => action,
                Err(error) => {
                    warn!(%entity, %error, "enemy provider failed, waiting instead");
                    Action::wait(entity)
                }
            };

            let status = self.resolve(action);
            time::sleep(self.timing.enemy_settle).await;
            if status.is_over() {
                return Ok(status);
            }
        }

        Ok(self.state.status())
    }

    async fn conclude(&mut self, outcome: SessionOutcome) -> SessionOutcome {
        info!(%outcome, nonce = self.state.nonce, "session over");
        time::sleep(self.timing.game_over_delay).await;

        self.event_bus.publish(match outcome {
            SessionOutcome::Victory => SessionEvent::Victory,
            SessionOutcome::Defeat => SessionEvent::Defeat,
        });
        outcome
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// Moves the state machine, failing loudly on an illegal edge.
    fn advance(&mut self, next: TurnPhase) -> Result<()> {
        if !self.phase.can_advance_to(next) {
            error!(from = %self.phase, to = %next, "illegal phase transition");
            return Err(RuntimeError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }

        debug!(from = %self.phase, to = %next, "phase transition");
        self.phase = next;
        self.event_bus.publish(TurnEvent::PhaseChanged { phase: next });
        Ok(())
    }

    /// Applies one action and publishes its outcome and the new status.
    fn resolve(&mut self, action: Action) -> SessionStatus {
        let actor = action.actor();

        match CombatResolver::new(&mut self.state).execute(&action) {
            Ok(outcome) => {
                debug!(
                    nonce = outcome.nonce,
                    %actor,
                    kind = %action.kind(),
                    effects = outcome.result.effects.len(),
                    "action resolved"
                );
                self.event_bus.publish(CombatEvent::ActionResolved {
                    nonce: outcome.nonce,
                    actor,
                    action,
                    effects: outcome.result.effects,
                });
            }
            Err(error) => {
                match error.severity() {
                    ErrorSeverity::Internal | ErrorSeverity::Fatal => {
                        error!(%actor, code = error.error_code(), %error, "action rejected")
                    }
                    _ => warn!(%actor, code = error.error_code(), %error, "action had no effect"),
                }
                self.event_bus.publish(CombatEvent::ActionFailed {
                    actor,
                    action,
                    error,
                });
            }
        }

        self.publish_status();
        self.state.status()
    }

    fn accept_vote(&mut self, symbol: VoteSymbol) {
        match self.votes.cast_vote(symbol) {
            Ok(count) => {
                debug!(%symbol, count, "vote accepted");
                self.event_bus.publish(VoteEvent::Accepted { symbol, count });
            }
            Err(error) => {
                trace!(%symbol, %error, "vote dropped");
                self.event_bus.publish(VoteEvent::Rejected { symbol });
            }
        }
    }

    /// Discards votes that queued up while no window was open.
    fn drop_stale_votes(&mut self) {
        while let Ok(symbol) = self.vote_rx.try_recv() {
            trace!(%symbol, "vote arrived outside a window");
            self.event_bus.publish(VoteEvent::Rejected { symbol });
        }
    }

    fn publish_status(&self) {
        self.event_bus
            .publish(SessionEvent::StatusChanged(StatusSnapshot::capture(&self.state)));
        self.snapshot_tx.send_replace(Arc::new(self.state.clone()));
    }
}
