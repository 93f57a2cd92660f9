//! Unified error types surfaced by the runtime API.
//!
//! Wraps startup failures, phase-gating violations and channel plumbing so
//! clients can bubble them up with consistent context.
use std::path::PathBuf;

use thiserror::Error;

use game_core::{EntityId, InitializationError, InvariantViolation, VoteError};

use super::phase::TurnPhase;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to initialize session state")]
    Initialization(#[from] InitializationError),

    #[error("initial state is inconsistent")]
    InconsistentState(#[from] InvariantViolation),

    /// A phase-gated step was requested outside the phase that permits it.
    #[error("invalid phase transition from {from} to {to}")]
    InvalidTransition { from: TurnPhase, to: TurnPhase },

    #[error("vote window bookkeeping failed")]
    Vote(#[from] VoteError),

    #[error("entity {0} is not on the board")]
    UnknownEntity(EntityId),

    #[error("vote channel closed")]
    VoteChannelClosed,

    #[error("turn controller join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("failed to read scenario file {path}")]
    ScenarioIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario file {path}")]
    ScenarioParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}
