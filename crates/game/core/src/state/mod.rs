//! Authoritative arena state.
//!
//! [`GameState`] owns the grid, the player and the enemy roster. Runtime
//! layers clone or query it, but mutate it exclusively through
//! [`crate::engine::CombatResolver`].
mod combatant;
mod common;
mod error;
mod grid;

pub use combatant::{
    Combatant, CooldownKind, Cooldowns, DamageReport, Damageable, EnemyState, ReachPattern, Role,
    TurnTaker, WeaponClass, WeaponProfile,
};
pub use common::{Direction, EntityId, Health, Position, WorldPosition};
pub use error::{InitializationError, InvariantViolation};
pub use grid::{CellType, GridError, GridWorld};

use std::collections::BTreeMap;

use crate::config::{CombatantConfig, GameConfig};

/// Whether the session is still running, and who won if not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SessionStatus {
    Ongoing,
    /// Every enemy has been removed from the roster.
    Victory,
    /// The player's health reached zero.
    Defeat,
}

impl SessionStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, SessionStatus::Ongoing)
    }
}

/// Canonical snapshot of the arena.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub grid: GridWorld,
    pub player: Combatant,
    /// Live enemies in spawn order. Dead enemies are removed immediately.
    enemies: Vec<Combatant>,
    /// Sequential enemy id allocator. Never reused; 0 is the player.
    next_entity_id: u32,
    /// Number of resolutions applied so far.
    pub nonce: u64,
}

impl GameState {
    /// Creates an arena holding only the player.
    pub fn new(
        config: &GameConfig,
        player_position: Position,
        player_config: CombatantConfig,
    ) -> Result<Self, InitializationError> {
        if config.width == 0 || config.height == 0 {
            return Err(InitializationError::EmptyGrid {
                width: config.width,
                height: config.height,
            });
        }
        if !(config.cell_size.is_finite() && config.cell_size > 0.0) {
            return Err(InitializationError::InvalidCellSize {
                cell_size: config.cell_size,
            });
        }
        if player_config.max_health == 0 {
            return Err(InitializationError::ZeroMaxHealth {
                entity: EntityId::PLAYER,
            });
        }

        let mut grid = GridWorld::new(config);
        grid.set_cell(player_position, CellType::Player)
            .map_err(|_| InitializationError::OutOfBounds {
                position: player_position,
            })?;

        Ok(Self {
            grid,
            player: Combatant::player(player_position, player_config),
            enemies: Vec::new(),
            next_entity_id: 1,
            nonce: 0,
        })
    }

    fn claim_cell(&mut self, position: Position, cell: CellType) -> Result<(), InitializationError> {
        if !self.grid.is_in_bounds(position) {
            return Err(InitializationError::OutOfBounds { position });
        }
        let occupant = self.grid.cell_at(position);
        if occupant != CellType::Empty {
            return Err(InitializationError::Occupied { position, occupant });
        }
        self.grid
            .set_cell(position, cell)
            .map_err(|_| InitializationError::OutOfBounds { position })
    }

    /// Marks a permanently blocked cell.
    pub fn add_obstacle(&mut self, position: Position) -> Result<(), InitializationError> {
        self.claim_cell(position, CellType::Obstacle)
    }

    /// Places a new enemy and appends it to the roster.
    pub fn spawn_enemy(
        &mut self,
        position: Position,
        config: CombatantConfig,
    ) -> Result<EntityId, InitializationError> {
        let id = EntityId(self.next_entity_id);
        if config.max_health == 0 {
            return Err(InitializationError::ZeroMaxHealth { entity: id });
        }
        self.claim_cell(position, CellType::Enemy)?;

        self.next_entity_id += 1;
        self.enemies.push(Combatant::enemy(id, position, config));
        Ok(id)
    }

    /// Checks that the arena is playable.
    pub fn validate(&self) -> Result<(), InitializationError> {
        if self.enemies.is_empty() {
            return Err(InitializationError::NoEnemies);
        }
        Ok(())
    }

    /// Live enemies, in turn order.
    pub fn roster(&self) -> &[Combatant] {
        &self.enemies
    }

    pub fn roster_ids(&self) -> Vec<EntityId> {
        self.enemies.iter().map(|enemy| enemy.id).collect()
    }

    pub fn combatant(&self, id: EntityId) -> Option<&Combatant> {
        if id.is_player() {
            return Some(&self.player);
        }
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn combatant_mut(&mut self, id: EntityId) -> Option<&mut Combatant> {
        if id.is_player() {
            return Some(&mut self.player);
        }
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    /// Live combatant standing on `position`.
    pub fn combatant_at(&self, position: Position) -> Option<&Combatant> {
        std::iter::once(&self.player)
            .chain(self.enemies.iter())
            .find(|c| c.is_alive_on(position))
    }

    /// Returns true if `id` is a live combatant.
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.combatant(id).is_some_and(Damageable::is_alive)
    }

    /// Drops a dead enemy from the roster and vacates its cell.
    pub(crate) fn remove_enemy(&mut self, id: EntityId) -> Option<Combatant> {
        let index = self.enemies.iter().position(|enemy| enemy.id == id)?;
        let enemy = self.enemies.remove(index);
        // The position was validated when the enemy entered it.
        let _ = self.grid.set_cell(enemy.position, CellType::Empty);
        Some(enemy)
    }

    pub fn status(&self) -> SessionStatus {
        if !self.player.is_alive() {
            SessionStatus::Defeat
        } else if self.enemies.is_empty() {
            SessionStatus::Victory
        } else {
            SessionStatus::Ongoing
        }
    }

    /// Verifies that grid cells and combatant positions agree.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut standing: BTreeMap<Position, EntityId> = BTreeMap::new();
        let live = std::iter::once(&self.player)
            .filter(|player| player.is_alive())
            .chain(self.enemies.iter());

        for combatant in live {
            if !combatant.is_alive() {
                return Err(InvariantViolation::DeadOnRoster {
                    entity: combatant.id,
                });
            }
            let found = self.grid.cell_at(combatant.position);
            if found != combatant.cell_type() {
                return Err(InvariantViolation::CellMismatch {
                    entity: combatant.id,
                    position: combatant.position,
                    found,
                });
            }
            if let Some(first) = standing.insert(combatant.position, combatant.id) {
                return Err(InvariantViolation::SharedCell {
                    position: combatant.position,
                    first,
                    second: combatant.id,
                });
            }
        }

        for (position, found) in self.grid.cells() {
            if found.is_combatant() && !standing.contains_key(&position) {
                return Err(InvariantViolation::OrphanCell { position, found });
            }
        }

        Ok(())
    }
}

impl Combatant {
    fn is_alive_on(&self, position: Position) -> bool {
        self.is_alive() && self.position == position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> GameState {
        GameState::new(
            &GameConfig::new(6, 3, 1.0),
            Position::new(1, 1),
            CombatantConfig::player(),
        )
        .unwrap()
    }

    #[test]
    fn spawning_marks_cells_and_allocates_ids() {
        let mut state = arena();
        let first = state
            .spawn_enemy(Position::new(4, 1), CombatantConfig::sword_enemy())
            .unwrap();
        let second = state
            .spawn_enemy(Position::new(5, 1), CombatantConfig::spear_enemy())
            .unwrap();

        assert_eq!(first, EntityId(1));
        assert_eq!(second, EntityId(2));
        assert_eq!(state.grid.cell_at(Position::new(4, 1)), CellType::Enemy);
        assert_eq!(state.roster_ids(), vec![first, second]);
        assert_eq!(state.status(), SessionStatus::Ongoing);
        state.check_invariants().unwrap();
    }

    #[test]
    fn overlapping_placements_are_fatal() {
        let mut state = arena();
        state.add_obstacle(Position::new(3, 1)).unwrap();

        assert_eq!(
            state.spawn_enemy(Position::new(3, 1), CombatantConfig::sword_enemy()),
            Err(InitializationError::Occupied {
                position: Position::new(3, 1),
                occupant: CellType::Obstacle,
            })
        );
        assert_eq!(
            state.spawn_enemy(Position::new(1, 1), CombatantConfig::sword_enemy()),
            Err(InitializationError::Occupied {
                position: Position::new(1, 1),
                occupant: CellType::Player,
            })
        );
        assert_eq!(
            state.add_obstacle(Position::new(7, 0)),
            Err(InitializationError::OutOfBounds {
                position: Position::new(7, 0),
            })
        );
    }

    #[test]
    fn arena_without_enemies_is_rejected() {
        assert_eq!(arena().validate(), Err(InitializationError::NoEnemies));
    }

    #[test]
    fn bad_world_configuration_is_rejected() {
        let player = CombatantConfig::player();
        assert!(matches!(
            GameState::new(&GameConfig::new(0, 4, 1.0), Position::ORIGIN, player.clone()),
            Err(InitializationError::EmptyGrid { .. })
        ));
        assert!(matches!(
            GameState::new(&GameConfig::new(4, 4, 0.0), Position::ORIGIN, player.clone()),
            Err(InitializationError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            GameState::new(&GameConfig::new(4, 4, 1.0), Position::new(4, 0), player),
            Err(InitializationError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn removing_an_enemy_vacates_its_cell() {
        let mut state = arena();
        let id = state
            .spawn_enemy(Position::new(4, 1), CombatantConfig::sword_enemy())
            .unwrap();

        let removed = state.remove_enemy(id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(state.grid.cell_at(Position::new(4, 1)), CellType::Empty);
        assert_eq!(state.status(), SessionStatus::Victory);
    }
}
