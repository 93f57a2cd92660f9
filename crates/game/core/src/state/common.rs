use std::fmt;

/// Unique identifier for any combatant tracked in the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the crowd-controlled player combatant.
    pub const PLAYER: Self = Self(0);

    /// Returns true if this entity represents the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the cell `distance` steps away along `direction`.
    pub fn step(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx * distance, self.y + dy * distance)
    }

    /// Offset from `self` to `other` as `(dx, dy)`.
    pub fn offset_to(self, other: Position) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Continuous presentation-space coordinate.
///
/// Only the presentation layer cares about these; the rules never read them.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
}

impl WorldPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Facing / movement direction. Each variant is a unit vector on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        }
    }

    /// Negates both axis components.
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Projects the offset `from → to` onto its dominant axis.
    ///
    /// The axis with the larger absolute offset wins; equal offsets favor the
    /// horizontal axis. Returns `None` when both positions coincide.
    pub fn toward(from: Position, to: Position) -> Option<Self> {
        let (dx, dy) = from.offset_to(to);
        if dx == 0 && dy == 0 {
            return None;
        }

        if dx.abs() >= dy.abs() {
            Some(if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else {
            Some(if dy > 0 { Direction::Up } else { Direction::Down })
        }
    }
}

/// Integer health meter clamped to `[0, maximum]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub current: u32,
    pub maximum: u32,
}

impl Health {
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Subtracts `amount`, flooring at zero. Returns the health actually removed.
    pub fn reduce(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        before - self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toward_prefers_dominant_axis() {
        let origin = Position::new(5, 5);
        assert_eq!(
            Direction::toward(origin, Position::new(2, 4)),
            Some(Direction::Left)
        );
        assert_eq!(
            Direction::toward(origin, Position::new(6, 9)),
            Some(Direction::Up)
        );
        assert_eq!(
            Direction::toward(origin, Position::new(5, 1)),
            Some(Direction::Down)
        );
        assert_eq!(Direction::toward(origin, origin), None);
    }

    #[test]
    fn toward_breaks_ties_horizontally() {
        let origin = Position::new(0, 0);
        assert_eq!(
            Direction::toward(origin, Position::new(3, 3)),
            Some(Direction::Right)
        );
        assert_eq!(
            Direction::toward(origin, Position::new(-2, -2)),
            Some(Direction::Left)
        );
    }

    #[test]
    fn health_floors_at_zero() {
        let mut health = Health::full(5);
        assert_eq!(health.reduce(7), 5);
        assert_eq!(health.current, 0);
        assert!(health.is_depleted());
        assert_eq!(health.reduce(3), 0);
    }
}
