use crate::state::{Direction, WeaponClass};

/// World-level configuration: grid extent and presentation cell size.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Edge length of one cell in presentation units.
    pub cell_size: f32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Longest reach pattern any weapon class may declare.
    pub const MAX_REACH: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WIDTH: u32 = 10;
    pub const DEFAULT_HEIGHT: u32 = 10;
    pub const DEFAULT_CELL_SIZE: f32 = 1.0;

    pub fn new(width: u32, height: u32, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            Self::DEFAULT_CELL_SIZE,
        )
    }
}

/// Per-combatant tuning, fixed at creation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantConfig {
    /// Presentation-only movement speed (cells per second).
    pub move_speed: f32,
    /// Base attack damage. Attacks have no variance.
    pub attack_damage: u32,
    /// Turns the attack stays unavailable after a hit.
    pub attack_cooldown: u32,
    /// Turns the swap ability stays unavailable after a swap.
    pub swap_cooldown: u32,
    pub max_health: u32,
    pub initial_facing: Direction,
    pub weapon: WeaponClass,
}

impl CombatantConfig {
    /// Reference player tuning.
    pub fn player() -> Self {
        Self {
            move_speed: 5.0,
            attack_damage: 10,
            attack_cooldown: 2,
            swap_cooldown: 3,
            max_health: 100,
            initial_facing: Direction::Right,
            weapon: WeaponClass::Melee,
        }
    }

    /// Reference sword enemy: adjacent reach.
    pub fn sword_enemy() -> Self {
        Self {
            move_speed: 3.0,
            attack_damage: 5,
            attack_cooldown: 0,
            swap_cooldown: 0,
            max_health: 50,
            initial_facing: Direction::Left,
            weapon: WeaponClass::Melee,
        }
    }

    /// Reference spear enemy: reaches one or two cells ahead.
    pub fn spear_enemy() -> Self {
        Self {
            attack_damage: 3,
            weapon: WeaponClass::Reach,
            ..Self::sword_enemy()
        }
    }

    /// Damage dealt to an enemy displaced by a swap.
    pub fn swap_damage(&self) -> u32 {
        self.attack_damage / 2
    }
}
