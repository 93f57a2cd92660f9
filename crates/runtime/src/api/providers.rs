//! Asynchronous abstraction for sourcing enemy intent.
//!
//! The turn controller asks an [`ActionProvider`] for each enemy's action so
//! sessions can run with the behavior-tree policy, scripted fixtures, or a
//! passive stand-in.
use async_trait::async_trait;
use game_core::{Action, EntityId, GameState};

use super::errors::Result;

/// Provides one action for a combatant from a read-only view of the board.
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Decide the action `entity` takes this turn.
    ///
    /// Errors are treated by the controller as a forfeited turn (the entity
    /// waits); they never end the session.
    async fn provide_action(&self, entity: EntityId, state: &GameState) -> Result<Action>;
}

/// A provider that always waits. Useful for tests or as a fallback.
pub struct WaitActionProvider;

#[async_trait]
impl ActionProvider for WaitActionProvider {
    async fn provide_action(&self, entity: EntityId, _state: &GameState) -> Result<Action> {
        Ok(Action::wait(entity))
    }
}
