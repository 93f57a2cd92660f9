//! Worker tasks that back the session orchestration.
//!
//! The turn controller is the only writer of the game state; clients reach
//! it through the vote queue and observe it through the event bus.

mod turn_controller;

pub(crate) use turn_controller::TurnController;
