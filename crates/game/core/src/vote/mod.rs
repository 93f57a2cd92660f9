//! Timed vote collection.
//!
//! A [`VoteAggregator`] owns the tally for one countdown window at a time.
//! It never touches the arena; the winning [`VoteSymbol`] is mapped to a
//! concrete [`Action`] by the caller through [`VoteSymbol::to_action`].

use crate::action::Action;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Direction, EntityId};

/// Closed set of crowd vote symbols, in declaration (tie-break) order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum VoteSymbol {
    A,
    D,
    W,
    S,
    J,
}

impl VoteSymbol {
    /// Declaration order. Ties resolve to the earliest entry.
    pub const ALL: [VoteSymbol; 5] = [
        VoteSymbol::A,
        VoteSymbol::D,
        VoteSymbol::W,
        VoteSymbol::S,
        VoteSymbol::J,
    ];

    /// Winner of a window in which nobody voted.
    pub const DEFAULT: VoteSymbol = VoteSymbol::S;

    const fn index(self) -> usize {
        match self {
            VoteSymbol::A => 0,
            VoteSymbol::D => 1,
            VoteSymbol::W => 2,
            VoteSymbol::S => 3,
            VoteSymbol::J => 4,
        }
    }

    /// Parses a single symbol character, case-insensitively.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(VoteSymbol::A),
            'd' => Some(VoteSymbol::D),
            'w' => Some(VoteSymbol::W),
            's' => Some(VoteSymbol::S),
            'j' => Some(VoteSymbol::J),
            _ => None,
        }
    }

    /// Human-readable name of the mapped action.
    pub const fn command_name(self) -> &'static str {
        match self {
            VoteSymbol::A => "move left",
            VoteSymbol::D => "move right",
            VoteSymbol::W => "turn",
            VoteSymbol::S => "wait",
            VoteSymbol::J => "attack",
        }
    }

    /// Fixed symbol → action table for the player.
    pub fn to_action(self, player: EntityId) -> Action {
        match self {
            VoteSymbol::A => Action::step(player, Direction::Left),
            VoteSymbol::D => Action::step(player, Direction::Right),
            VoteSymbol::W => Action::reverse(player),
            VoteSymbol::S => Action::wait(player),
            VoteSymbol::J => Action::attack(player),
        }
    }
}

/// Per-symbol vote counts for one window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoteTally {
    counts: [u32; 5],
}

impl VoteTally {
    pub fn count(&self, symbol: VoteSymbol) -> u32 {
        self.counts[symbol.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Adds one vote and returns the new count for `symbol`.
    fn increment(&mut self, symbol: VoteSymbol) -> u32 {
        let slot = &mut self.counts[symbol.index()];
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Symbol with the strictly highest count; ties go to declaration order,
    /// and an empty tally yields [`VoteSymbol::DEFAULT`].
    pub fn winner(&self) -> VoteSymbol {
        let mut best = VoteSymbol::DEFAULT;
        let mut best_count = 0;
        for symbol in VoteSymbol::ALL {
            let count = self.count(symbol);
            if count > best_count {
                best = symbol;
                best_count = count;
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (VoteSymbol, u32)> + '_ {
        VoteSymbol::ALL.into_iter().map(|symbol| (symbol, self.count(symbol)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VoteError {
    #[error("no vote window is open")]
    WindowClosed,

    #[error("unknown vote symbol '{0}'")]
    UnknownSymbol(String),
}

impl GameError for VoteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::WindowClosed => ErrorSeverity::Recoverable,
            Self::UnknownSymbol(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WindowClosed => "VOTE_WINDOW_CLOSED",
            Self::UnknownSymbol(_) => "VOTE_UNKNOWN_SYMBOL",
        }
    }
}

/// Result of closing a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowResult {
    pub winner: VoteSymbol,
    pub tally: VoteTally,
}

/// Collects votes while a window is open.
#[derive(Clone, Debug, Default)]
pub struct VoteAggregator {
    tally: VoteTally,
    open: bool,
}

impl VoteAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn tally(&self) -> &VoteTally {
        &self.tally
    }

    /// Resets the tally and starts accepting votes.
    pub fn begin_window(&mut self) {
        self.tally = VoteTally::default();
        self.open = true;
    }

    /// Records one vote. Returns the updated count for `symbol`.
    pub fn cast_vote(&mut self, symbol: VoteSymbol) -> Result<u32, VoteError> {
        if !self.open {
            return Err(VoteError::WindowClosed);
        }
        Ok(self.tally.increment(symbol))
    }

    /// Parses and records a raw symbol string such as `"a"` or `"J"`.
    pub fn cast_raw(&mut self, raw: &str) -> Result<(VoteSymbol, u32), VoteError> {
        let symbol: VoteSymbol = raw
            .trim()
            .parse()
            .map_err(|_| VoteError::UnknownSymbol(raw.to_owned()))?;
        self.cast_vote(symbol).map(|count| (symbol, count))
    }

    /// Stops accepting votes and returns the winner.
    pub fn end_window(&mut self) -> Result<WindowResult, VoteError> {
        if !self.open {
            return Err(VoteError::WindowClosed);
        }
        self.open = false;
        Ok(WindowResult {
            winner: self.tally.winner(),
            tally: self.tally,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_window(votes: &[(VoteSymbol, u32)]) -> VoteSymbol {
        let mut aggregator = VoteAggregator::new();
        aggregator.begin_window();
        for &(symbol, times) in votes {
            for _ in 0..times {
                aggregator.cast_vote(symbol).unwrap();
            }
        }
        aggregator.end_window().unwrap().winner
    }

    #[test]
    fn strict_majority_wins() {
        assert_eq!(
            run_window(&[(VoteSymbol::A, 3), (VoteSymbol::D, 1), (VoteSymbol::W, 1)]),
            VoteSymbol::A
        );
        assert_eq!(
            run_window(&[(VoteSymbol::A, 1), (VoteSymbol::J, 2)]),
            VoteSymbol::J
        );
    }

    #[test]
    fn ties_resolve_in_declaration_order() {
        let all_once: Vec<_> = VoteSymbol::ALL.iter().map(|s| (*s, 1)).collect();
        assert_eq!(run_window(&all_once), VoteSymbol::A);
        assert_eq!(
            run_window(&[(VoteSymbol::J, 2), (VoteSymbol::W, 2)]),
            VoteSymbol::W
        );
    }

    #[test]
    fn empty_window_defaults_to_wait() {
        let winner = run_window(&[]);
        assert_eq!(winner, VoteSymbol::S);
        assert_eq!(
            winner.to_action(EntityId::PLAYER),
            Action::wait(EntityId::PLAYER)
        );
    }

    #[test]
    fn votes_outside_a_window_are_dropped() {
        let mut aggregator = VoteAggregator::new();
        assert_eq!(
            aggregator.cast_vote(VoteSymbol::A),
            Err(VoteError::WindowClosed)
        );

        aggregator.begin_window();
        aggregator.cast_vote(VoteSymbol::D).unwrap();
        aggregator.end_window().unwrap();
        assert_eq!(
            aggregator.cast_vote(VoteSymbol::D),
            Err(VoteError::WindowClosed)
        );

        // Reopening starts from zero.
        aggregator.begin_window();
        assert_eq!(aggregator.tally().total(), 0);
    }

    #[test]
    fn raw_symbols_are_case_insensitive() {
        let mut aggregator = VoteAggregator::new();
        aggregator.begin_window();
        assert_eq!(aggregator.cast_raw("j"), Ok((VoteSymbol::J, 1)));
        assert_eq!(aggregator.cast_raw("J"), Ok((VoteSymbol::J, 2)));
        assert_eq!(
            aggregator.cast_raw("x"),
            Err(VoteError::UnknownSymbol("x".into()))
        );
        assert_eq!(aggregator.tally().total(), 2);
    }
}
