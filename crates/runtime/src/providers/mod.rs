//! Action provider implementations for different entity behaviors.

pub mod ai;

pub use ai::EnemyAiProvider;
