//! Runtime orchestration for the crowd-voted arena.
//!
//! This crate drives the deterministic rules in `game-core` through time: it
//! runs the countdown → player → enemies cycle, collects votes, lets enemies
//! decide through a behavior tree, and publishes everything presentation
//! needs as events. Consumers build a [`Session`] and talk to it through
//! [`SessionHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the session and its builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus and payloads
//! - [`providers`] holds the enemy decision procedure
//! - [`input`] turns chat lines and key presses into votes
//! - [`scenario`] loads arena layouts
//! - `workers` keeps the turn controller internal to the crate
pub mod api;
pub mod events;
pub mod input;
pub mod providers;
pub mod runtime;
pub mod scenario;

mod workers;

pub use api::{
    ActionProvider, Result, RuntimeError, SessionHandle, TurnPhase, WaitActionProvider,
};
pub use events::{
    CombatEvent, CombatantStatus, Event, EventBus, HealthThreshold, SessionEvent, StatusSnapshot,
    Topic, TurnEvent, VoteEvent,
};
pub use providers::EnemyAiProvider;
pub use runtime::{RuntimeConfig, Session, SessionBuilder, SessionOutcome, TimingConfig};
pub use scenario::{EnemyKind, EnemyPlacement, PlayerPlacement, Scenario};
