//! Presentation events and the topic bus that carries them.
//!
//! Every presentation callback the turn controller fires (countdown display,
//! vote highlight, result banner, status panels, victory and defeat) is an
//! event published here. Delivery is fire-and-forget.
mod bus;
mod health;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use health::HealthThreshold;
pub use types::{
    CombatEvent, CombatantStatus, SessionEvent, StatusSnapshot, TurnEvent, VoteEvent, banner_text,
};
