//! Keyboard vote keys.

use game_core::VoteSymbol;

/// Keys that cast a vote when pressed. Space is an alias for attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum VoteKey {
    A,
    D,
    W,
    S,
    J,
    Space,
}

impl VoteKey {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Self::A),
            'd' => Some(Self::D),
            'w' => Some(Self::W),
            's' => Some(Self::S),
            'j' => Some(Self::J),
            ' ' => Some(Self::Space),
            _ => None,
        }
    }

    pub fn symbol(self) -> VoteSymbol {
        match self {
            Self::A => VoteSymbol::A,
            Self::D => VoteSymbol::D,
            Self::W => VoteSymbol::W,
            Self::S => VoteSymbol::S,
            Self::J | Self::Space => VoteSymbol::J,
        }
    }
}

/// Votes for every key that went down this frame, one per key.
pub fn frame_votes(pressed: impl IntoIterator<Item = VoteKey>) -> Vec<VoteSymbol> {
    pressed.into_iter().map(VoteKey::symbol).collect()
}
