//! Shared combatant model for the player and enemies.

use arrayvec::ArrayVec;

use crate::config::{CombatantConfig, GameConfig};

use super::{CellType, Direction, EntityId, Health, Position};

/// Weapon classes and the reach pattern each one carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WeaponClass {
    /// Strikes the adjacent cell ahead.
    #[default]
    Melee,
    /// Strikes one or two cells ahead.
    Reach,
}

impl WeaponClass {
    pub fn pattern(self) -> ReachPattern {
        match self {
            WeaponClass::Melee => ReachPattern::from_distances(&[1]),
            WeaponClass::Reach => ReachPattern::from_distances(&[1, 2]),
        }
    }
}

/// Ordered distances (in cells, along facing) a weapon can strike.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachPattern(ArrayVec<u8, { GameConfig::MAX_REACH }>);

impl ReachPattern {
    /// Builds a pattern, keeping at most [`GameConfig::MAX_REACH`] entries.
    pub fn from_distances(distances: &[u8]) -> Self {
        Self(distances.iter().copied().take(GameConfig::MAX_REACH).collect())
    }

    pub fn distances(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().map(|d| i32::from(*d))
    }

    /// Cells struck from `origin` while facing `facing`, in pattern order.
    pub fn cells(&self, origin: Position, facing: Direction) -> impl Iterator<Item = Position> + '_ {
        self.distances().map(move |d| origin.step(facing, d))
    }

    pub fn covers(&self, origin: Position, facing: Direction, target: Position) -> bool {
        self.cells(origin, facing).any(|cell| cell == target)
    }
}

/// Weapon class plus its materialized reach pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponProfile {
    pub class: WeaponClass,
    pub reach: ReachPattern,
}

impl From<WeaponClass> for WeaponProfile {
    fn from(class: WeaponClass) -> Self {
        Self {
            class,
            reach: class.pattern(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CooldownKind {
    Attack,
    Swap,
}

/// Remaining turns before each ability is usable again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cooldowns {
    pub attack: u32,
    pub swap: u32,
}

impl Cooldowns {
    pub fn get(&self, kind: CooldownKind) -> u32 {
        match kind {
            CooldownKind::Attack => self.attack,
            CooldownKind::Swap => self.swap,
        }
    }

    pub fn is_ready(&self, kind: CooldownKind) -> bool {
        self.get(kind) == 0
    }

    pub fn arm(&mut self, kind: CooldownKind, turns: u32) {
        match kind {
            CooldownKind::Attack => self.attack = turns,
            CooldownKind::Swap => self.swap = turns,
        }
    }

    /// Decrements every nonzero counter by one, including one armed this turn.
    pub fn tick_down(&mut self) {
        self.attack = self.attack.saturating_sub(1);
        self.swap = self.swap.saturating_sub(1);
    }
}

/// Enemy-only turn state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    /// Set by a telegraph turn; the next turn must attack.
    pub charging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Player,
    Enemy(EnemyState),
}

/// Outcome of a single damage application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    pub target: EntityId,
    /// Health actually removed (never more than what was left).
    pub amount: u32,
    pub hp_before: u32,
    pub hp_after: u32,
    /// True only on the hit that brought health to zero.
    pub died: bool,
}

/// Anything that can lose health and die.
pub trait Damageable {
    fn health(&self) -> Health;

    fn is_alive(&self) -> bool;

    /// Reduces health, flooring at zero. Death is reported exactly once.
    fn take_damage(&mut self, amount: u32) -> DamageReport;
}

/// Anything that acts in the turn cycle.
pub trait TurnTaker {
    fn id(&self) -> EntityId;

    /// End-of-own-turn bookkeeping.
    fn end_turn(&mut self);
}

/// Player or enemy standing on the grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: EntityId,
    pub role: Role,
    pub position: Position,
    pub facing: Direction,
    pub health: Health,
    pub cooldowns: Cooldowns,
    pub weapon: WeaponProfile,
    pub config: CombatantConfig,
    alive: bool,
}

impl Combatant {
    pub fn player(position: Position, config: CombatantConfig) -> Self {
        Self::with_role(EntityId::PLAYER, Role::Player, position, config)
    }

    pub fn enemy(id: EntityId, position: Position, config: CombatantConfig) -> Self {
        Self::with_role(id, Role::Enemy(EnemyState::default()), position, config)
    }

    fn with_role(id: EntityId, role: Role, position: Position, config: CombatantConfig) -> Self {
        Self {
            id,
            role,
            position,
            facing: config.initial_facing,
            health: Health::full(config.max_health),
            cooldowns: Cooldowns::default(),
            weapon: WeaponProfile::from(config.weapon),
            config,
            alive: true,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.role, Role::Player)
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self.role, Role::Enemy(_))
    }

    /// Grid cell class this combatant marks while standing.
    pub fn cell_type(&self) -> CellType {
        match self.role {
            Role::Player => CellType::Player,
            Role::Enemy(_) => CellType::Enemy,
        }
    }

    pub fn is_charging(&self) -> bool {
        matches!(self.role, Role::Enemy(EnemyState { charging: true }))
    }

    /// Sets the telegraph flag. Returns false for the player, which cannot charge.
    pub fn set_charging(&mut self, charging: bool) -> bool {
        match &mut self.role {
            Role::Enemy(enemy) => {
                enemy.charging = charging;
                true
            }
            Role::Player => false,
        }
    }

    /// Whether `target` lies in this combatant's reach from its current facing.
    pub fn threatens(&self, target: Position) -> bool {
        self.weapon.reach.covers(self.position, self.facing, target)
    }
}

impl Damageable for Combatant {
    fn health(&self) -> Health {
        self.health
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn take_damage(&mut self, amount: u32) -> DamageReport {
        let hp_before = self.health.current;
        let removed = self.health.reduce(amount);
        let died = self.alive && self.health.is_depleted();
        if died {
            self.alive = false;
            self.set_charging(false);
        }

        DamageReport {
            target: self.id,
            amount: removed,
            hp_before,
            hp_after: self.health.current,
            died,
        }
    }
}

impl TurnTaker for Combatant {
    fn id(&self) -> EntityId {
        self.id
    }

    fn end_turn(&mut self) {
        self.cooldowns.tick_down();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn melee_reach_is_one_cell_ahead() {
        let config = CombatantConfig::sword_enemy();
        let enemy = Combatant::enemy(EntityId(1), Position::new(5, 5), config);
        assert_eq!(enemy.facing, Direction::Left);
        assert!(enemy.threatens(Position::new(4, 5)));
        assert!(!enemy.threatens(Position::new(3, 5)));
        assert!(!enemy.threatens(Position::new(6, 5)));
    }

    #[test]
    fn reach_weapon_covers_two_cells() {
        let enemy = Combatant::enemy(
            EntityId(1),
            Position::new(5, 5),
            CombatantConfig::spear_enemy(),
        );
        assert!(enemy.threatens(Position::new(4, 5)));
        assert!(enemy.threatens(Position::new(3, 5)));
        assert!(!enemy.threatens(Position::new(2, 5)));
    }

    #[test]
    fn lethal_hit_reports_death_once() {
        let config = CombatantConfig {
            max_health: 5,
            ..CombatantConfig::sword_enemy()
        };
        let mut enemy = Combatant::enemy(EntityId(3), Position::ORIGIN, config);

        let first = enemy.take_damage(5);
        assert_eq!(first.hp_after, 0);
        assert!(first.died);
        assert!(!enemy.is_alive());

        let second = enemy.take_damage(5);
        assert_eq!(second.amount, 0);
        assert!(!second.died);
        assert_eq!(enemy.health.current, 0);
    }

    #[test]
    fn armed_cooldown_ticks_on_its_own_turn() {
        let mut cooldowns = Cooldowns {
            attack: 2,
            swap: 0,
        };
        cooldowns.arm(CooldownKind::Swap, 3);
        cooldowns.tick_down();
        assert_eq!(cooldowns, Cooldowns { attack: 1, swap: 2 });

        cooldowns.tick_down();
        cooldowns.tick_down();
        assert_eq!(cooldowns, Cooldowns { attack: 0, swap: 0 });
    }

    #[test]
    fn player_cannot_charge() {
        let mut player = Combatant::player(Position::ORIGIN, CombatantConfig::player());
        assert!(!player.set_charging(true));
        assert!(!player.is_charging());
    }
}
