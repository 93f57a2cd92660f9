//! Scenario system for arena layout and game initialization.
//!
//! A scenario names the grid, its obstacles, and where the player and each
//! enemy start. Scenarios are plain data (RON on disk) so arenas can be
//! tuned without touching code; [`Scenario::build_state`] turns one into a
//! validated [`GameState`].

use std::path::Path;

use game_core::{CombatantConfig, GameConfig, GameState, Position};
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};

/// Player start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerPlacement {
    pub position: Position,
    #[serde(default = "CombatantConfig::player")]
    pub config: CombatantConfig,
}

/// Enemy archetype to spawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Melee, strikes the adjacent cell.
    Sword,
    /// Reaches one or two cells ahead.
    Spear,
    Custom(CombatantConfig),
}

impl EnemyKind {
    pub fn config(&self) -> CombatantConfig {
        match self {
            EnemyKind::Sword => CombatantConfig::sword_enemy(),
            EnemyKind::Spear => CombatantConfig::spear_enemy(),
            EnemyKind::Custom(config) => config.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyPlacement {
    pub position: Position,
    pub kind: EnemyKind,
}

/// Scenario configuration for game initialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub world: GameConfig,
    pub player: PlayerPlacement,
    pub enemies: Vec<EnemyPlacement>,
    #[serde(default)]
    pub obstacles: Vec<Position>,
}

impl Scenario {
    /// Builds the starting board. Enemies take ids in listing order,
    /// starting at 1.
    pub fn build_state(&self) -> Result<GameState> {
        let mut state = GameState::new(
            &self.world,
            self.player.position,
            self.player.config.clone(),
        )?;

        for &obstacle in &self.obstacles {
            state.add_obstacle(obstacle)?;
        }
        for enemy in &self.enemies {
            state.spawn_enemy(enemy.position, enemy.kind.config())?;
        }
        state.validate()?;

        tracing::info!(
            width = self.world.width,
            height = self.world.height,
            enemies = self.enemies.len(),
            obstacles = self.obstacles.len(),
            "scenario built"
        );
        Ok(state)
    }

    /// Load scenario from a RON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ScenarioIo {
            path: path.to_path_buf(),
            source,
        })?;

        ron::from_str(&content).map_err(|source| RuntimeError::ScenarioParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Scenario {
    /// Reference arena: one lane, a sword enemy close in and a spear enemy
    /// behind it, with cover above and below the lane.
    fn default() -> Self {
        Self {
            world: GameConfig::default(),
            player: PlayerPlacement {
                position: Position::new(1, 4),
                config: CombatantConfig::player(),
            },
            enemies: vec![
                EnemyPlacement {
                    position: Position::new(5, 4),
                    kind: EnemyKind::Sword,
                },
                EnemyPlacement {
                    position: Position::new(8, 4),
                    kind: EnemyKind::Spear,
                },
            ],
            obstacles: vec![Position::new(3, 5), Position::new(3, 3), Position::new(7, 6)],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use game_core::{CellType, InitializationError, WeaponClass};

    use super::*;

    #[test]
    fn default_arena_is_playable() {
        let state = Scenario::default().build_state().unwrap();
        assert_eq!(state.roster().len(), 2);
        assert_eq!(state.grid.cell_at(Position::new(1, 4)), CellType::Player);
        assert_eq!(state.grid.cell_at(Position::new(3, 5)), CellType::Obstacle);
        state.check_invariants().unwrap();
    }

    #[test]
    fn loads_from_ron_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                world: (width: 6, height: 3, cell_size: 1.0),
                player: (position: (x: 0, y: 1)),
                enemies: [
                    (position: (x: 4, y: 1), kind: Spear),
                ],
            )"#
        )
        .unwrap();

        let scenario = Scenario::load(file.path()).unwrap();
        assert!(scenario.obstacles.is_empty());
        assert_eq!(scenario.player.config, CombatantConfig::player());

        let state = scenario.build_state().unwrap();
        let spear = &state.roster()[0];
        assert_eq!(spear.weapon.class, WeaponClass::Reach);
        assert_eq!(spear.position, Position::new(4, 1));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.ron");
        match Scenario::load(&path) {
            Err(RuntimeError::ScenarioIo { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(world: oops").unwrap();
        assert!(matches!(
            Scenario::load(file.path()),
            Err(RuntimeError::ScenarioParse { .. })
        ));
    }

    #[test]
    fn overlapping_placements_are_fatal() {
        let mut scenario = Scenario::default();
        scenario.obstacles.push(Position::new(5, 4));
        assert!(matches!(
            scenario.build_state(),
            Err(RuntimeError::Initialization(
                InitializationError::Occupied { .. }
            ))
        ));
    }

    #[test]
    fn a_scenario_without_enemies_cannot_start() {
        let mut scenario = Scenario::default();
        scenario.enemies.clear();
        assert!(matches!(
            scenario.build_state(),
            Err(RuntimeError::Initialization(InitializationError::NoEnemies))
        ));
    }
}
