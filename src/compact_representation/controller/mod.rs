use rand::seq::IteratorRandom;
use rand::Rng;

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::types::{SegmentKey, WallGroupResolvableBoard};

use super::cell_grid::{Cell, CellGrid};
use super::dimensions::{Dimensions, Square, Standard, STANDARD_BOARD_SIZE};
use super::resolver::WallPlacement;
use super::wall_grid::WallGrid;

mod cell_updatable;
mod segment_lookup;
mod size_determinable;
mod wall_group_resolvable;
mod wall_interactive;
mod wire_conversion;

/// The single writer for a board's state.
///
/// Owns the [WallGrid] and the [CellGrid]; every change to either goes through the
/// capability traits implemented here (`WallInteractiveBoard`, `CellUpdatableBoard`). The
/// renderer only ever gets copies of segments and cells back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WallInteractionController<D: Dimensions> {
    walls: WallGrid<D>,
    cells: CellGrid<D>,
}

impl<D: Dimensions> WallInteractionController<D> {
    /// a fresh board: no highlighted or placed walls, empty cells
    pub fn new(dimensions: D) -> Self {
        WallInteractionController {
            walls: WallGrid::initialize(dimensions),
            cells: CellGrid::initialize(dimensions),
        }
    }

    #[allow(missing_docs)]
    pub fn walls(&self) -> &WallGrid<D> {
        &self.walls
    }

    #[allow(missing_docs)]
    pub fn cells(&self) -> &CellGrid<D> {
        &self.cells
    }

    /// the cell at `(row, col)`, or `None` off the board
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        self.cells.find(row, col)
    }

    /// keys of every placed segment, in grid order
    pub fn occupied_segments(&self) -> impl Iterator<Item = SegmentKey> + '_ {
        self.walls
            .iter()
            .filter(|(_, s)| s.is_occupied())
            .map(|(k, _)| k)
    }

    /// keys of every highlighted segment, in grid order
    pub fn selected_segments(&self) -> impl Iterator<Item = SegmentKey> + '_ {
        self.walls
            .iter()
            .filter(|(_, s)| s.is_selected())
            .map(|(k, _)| k)
    }

    /// picks a random wall placement that could be made right now, if any remain
    pub fn random_open_placement<R: Rng>(&self, rng: &mut R) -> Option<WallPlacement> {
        self.walls
            .iter()
            .filter_map(|(k, _)| self.resolve_group(k))
            .choose(rng)
    }
}

impl WallInteractionController<Square> {
    /// a board whose size is picked at runtime
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > u8::MAX as usize {
            return Err(BoardError::InvalidBoardSize(size));
        }
        Ok(Self::new(Square::from_size(size as u8)))
    }

    /// a board built from `config`
    pub fn from_config(config: &BoardConfig) -> Result<Self, BoardError> {
        Self::with_size(config.board_size as usize)
    }
}

impl Default for WallInteractionController<Standard> {
    fn default() -> Self {
        Self::new(Standard::from_size(STANDARD_BOARD_SIZE))
    }
}
