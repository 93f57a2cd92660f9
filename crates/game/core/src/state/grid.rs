//! Tile occupancy and coordinate math.
//!
//! [`GridWorld`] is the single source of truth for which class of occupant
//! stands on each cell. Reads treat anything outside the extent as a
//! permanent obstacle; writes outside the extent are rejected explicitly.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

use super::{Position, WorldPosition};

/// Tolerance applied before flooring presentation coordinates, so values a
/// hair below a cell boundary (float error) still land on that cell.
const SNAP_EPSILON: f32 = 1e-4;

/// Occupancy class of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CellType {
    #[default]
    Empty,
    Obstacle,
    Player,
    Enemy,
}

impl CellType {
    /// Returns true for cells holding a combatant.
    pub const fn is_combatant(self) -> bool {
        matches!(self, CellType::Player | CellType::Enemy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    #[error("cell {position} is outside the grid")]
    OutOfBounds { position: Position },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
        }
    }
}

/// Fixed-size cell grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWorld {
    width: u32,
    height: u32,
    cell_size: f32,
    cells: Vec<CellType>,
}

impl GridWorld {
    /// Creates an all-empty grid with the configured extent.
    pub fn new(config: &GameConfig) -> Self {
        let len = config.width as usize * config.height as usize;
        Self {
            width: config.width,
            height: config.height,
            cell_size: config.cell_size,
            cells: vec![CellType::Empty; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Presentation coordinate of the cell's origin corner.
    pub fn to_world(&self, position: Position) -> WorldPosition {
        WorldPosition::new(
            position.x as f32 * self.cell_size,
            position.y as f32 * self.cell_size,
        )
    }

    /// Cell containing the presentation coordinate.
    pub fn to_grid(&self, world: WorldPosition) -> Position {
        let snap = |v: f32| (v / self.cell_size + SNAP_EPSILON).floor() as i32;
        Position::new(snap(world.x), snap(world.y))
    }

    pub fn is_in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.is_in_bounds(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    /// Cell type at `position`; out-of-bounds reads report [`CellType::Obstacle`].
    pub fn cell_at(&self, position: Position) -> CellType {
        self.index(position)
            .map(|index| self.cells[index])
            .unwrap_or(CellType::Obstacle)
    }

    /// In bounds and empty.
    pub fn can_enter(&self, position: Position) -> bool {
        self.index(position)
            .is_some_and(|index| self.cells[index] == CellType::Empty)
    }

    pub fn set_cell(&mut self, position: Position, cell: CellType) -> Result<(), GridError> {
        let index = self
            .index(position)
            .ok_or(GridError::OutOfBounds { position })?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Clears `from` and marks `to` with `cell`.
    ///
    /// Both endpoints are checked before anything is written, so a rejected
    /// move leaves the grid untouched.
    pub fn move_entity(
        &mut self,
        from: Position,
        to: Position,
        cell: CellType,
    ) -> Result<(), GridError> {
        let from_index = self
            .index(from)
            .ok_or(GridError::OutOfBounds { position: from })?;
        let to_index = self
            .index(to)
            .ok_or(GridError::OutOfBounds { position: to })?;

        self.cells[from_index] = CellType::Empty;
        self.cells[to_index] = cell;
        Ok(())
    }

    /// Iterates every in-bounds cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellType)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let position = Position::new((index % width) as i32, (index / width) as i32);
            (position, *cell)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: u32, height: u32) -> GridWorld {
        GridWorld::new(&GameConfig::new(width, height, 1.0))
    }

    #[test]
    fn out_of_bounds_reads_as_obstacle() {
        let grid = grid(4, 3);
        assert_eq!(grid.cell_at(Position::new(-1, 0)), CellType::Obstacle);
        assert_eq!(grid.cell_at(Position::new(4, 0)), CellType::Obstacle);
        assert_eq!(grid.cell_at(Position::new(0, 3)), CellType::Obstacle);
        assert_eq!(grid.cell_at(Position::new(3, 2)), CellType::Empty);
        assert!(!grid.can_enter(Position::new(0, -1)));
    }

    #[test]
    fn out_of_bounds_writes_are_rejected() {
        let mut grid = grid(4, 3);
        let outside = Position::new(9, 9);
        assert_eq!(
            grid.set_cell(outside, CellType::Enemy),
            Err(GridError::OutOfBounds { position: outside })
        );

        grid.set_cell(Position::new(1, 1), CellType::Player).unwrap();
        assert_eq!(
            grid.move_entity(Position::new(1, 1), outside, CellType::Player),
            Err(GridError::OutOfBounds { position: outside })
        );
        // Rejected move leaves the origin intact.
        assert_eq!(grid.cell_at(Position::new(1, 1)), CellType::Player);
    }

    #[test]
    fn move_entity_clears_origin() {
        let mut grid = grid(4, 3);
        grid.set_cell(Position::new(0, 0), CellType::Enemy).unwrap();
        grid.move_entity(Position::new(0, 0), Position::new(1, 0), CellType::Enemy)
            .unwrap();
        assert_eq!(grid.cell_at(Position::new(0, 0)), CellType::Empty);
        assert_eq!(grid.cell_at(Position::new(1, 0)), CellType::Enemy);
        assert!(!grid.can_enter(Position::new(1, 0)));
    }

    #[test]
    fn world_round_trip_for_every_cell() {
        for cell_size in [1.0_f32, 0.3, 1.7, 32.0] {
            let grid = GridWorld::new(&GameConfig::new(7, 5, cell_size));
            for (position, _) in grid.cells() {
                assert_eq!(grid.to_grid(grid.to_world(position)), position);
            }
        }
    }

    #[test]
    fn to_grid_floors_interior_points() {
        let grid = GridWorld::new(&GameConfig::new(10, 10, 2.0));
        assert_eq!(
            grid.to_grid(WorldPosition::new(3.9, 0.5)),
            Position::new(1, 0)
        );
    }
}
