//! Action transition dispatch.

use crate::action::{Action, ActionResult, ActionTransition};
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Runs a transition through `pre_validate → apply → post_validate`.
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
) -> Result<ActionResult, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action variant to its transition.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Move(transition) => drive_transition(transition, state).map_err(ExecuteError::Move),
        Action::Attack(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::Attack)
        }
        Action::Turn(transition) => drive_transition(transition, state).map_err(|e| match e.error {}),
        Action::Wait(transition) => drive_transition(transition, state).map_err(|e| match e.error {}),
        Action::Charge(transition) => {
            drive_transition(transition, state).map_err(|e| match e.error {})
        }
    }
}
