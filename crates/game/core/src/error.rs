//! Common error infrastructure for game-core.
//!
//! Domain errors (`GridError`, `MoveError`, `AttackError`, ...) live next to
//! the code that raises them. This module only provides the severity
//! classification they all share.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the action becomes a no-op and the turn cycle continues
/// - **Validation**: a request that the caller should not have made
/// - **Internal**: grid and combatant state disagree; indicates a bug
/// - **Fatal**: the session cannot start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Examples: destination blocked, attack on cooldown.
    Recoverable,

    /// Examples: unknown actor, player asked to charge.
    Validation,

    /// Examples: grid cell reads Enemy but no enemy stands there.
    Internal,

    /// Examples: overlapping placements, empty roster.
    Fatal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common interface implemented by every game-core error.
pub trait GameError: std::error::Error {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant, suitable for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
