//! What an enemy can observe about the board before it decides.
//!
//! These are pure reads of [`GameState`]; the behavior tree never sees the
//! board directly, only the [`Perception`] computed here.

use game_core::{CellType, Combatant, Direction, GameState, Position};

/// Scans forward from `viewer` along its facing until the grid edge.
///
/// Sight is clear only when the first occupied cell is the player. Another
/// enemy or an obstacle blocks it, and so does reaching the edge without
/// meeting anyone.
pub fn line_of_sight(state: &GameState, viewer: &Combatant) -> bool {
    let mut cell = viewer.position.step(viewer.facing, 1);
    while state.grid.is_in_bounds(cell) {
        match state.grid.cell_at(cell) {
            CellType::Empty => cell = cell.step(viewer.facing, 1),
            CellType::Player => return true,
            CellType::Enemy | CellType::Obstacle => return false,
        }
    }
    false
}

/// Whether `viewer` faces `target` once the offset is projected onto its
/// dominant axis.
pub fn is_facing(viewer: &Combatant, target: Position) -> bool {
    Direction::toward(viewer.position, target) == Some(viewer.facing)
}

pub fn is_player_in_attack_range(enemy: &Combatant, player: Position) -> bool {
    enemy.threatens(player)
}

/// One-cell step toward `target`, if the destination can be entered.
pub fn approach_step(state: &GameState, mover: &Combatant, target: Position) -> Option<Direction> {
    let direction = Direction::toward(mover.position, target)?;
    state
        .grid
        .can_enter(mover.position.step(direction, 1))
        .then_some(direction)
}

/// Everything the enemy policy branches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Perception {
    pub charging: bool,
    pub sight_clear: bool,
    pub facing_player: bool,
    pub player_in_reach: bool,
    pub player_position: Position,
    /// Enterable step toward the player, if any.
    pub approach: Option<Direction>,
}

impl Perception {
    pub fn observe(state: &GameState, enemy: &Combatant) -> Self {
        let player_position = state.player.position;
        Self {
            charging: enemy.is_charging(),
            sight_clear: line_of_sight(state, enemy),
            facing_player: is_facing(enemy, player_position),
            player_in_reach: is_player_in_attack_range(enemy, player_position),
            player_position,
            approach: approach_step(state, enemy, player_position),
        }
    }
}
