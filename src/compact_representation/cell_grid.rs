use crate::types::PlayerId;

use super::dimensions::Dimensions;

const SELECTED: u8 = 0x01;
const SELECTABLE: u8 = 0x02;
const PRESENTED_OPTION: u8 = 0x04;

/// Display state of one cell. The board never interprets these flags, it only stores them
/// for the renderer
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    flags: u8,
    standing_player: Option<PlayerId>,
}

impl Cell {
    /// a selectable cell with nobody on it
    pub fn empty() -> Self {
        Cell {
            flags: SELECTABLE,
            standing_player: None,
        }
    }

    pub(crate) fn from_parts(
        selected: bool,
        selectable: bool,
        presented_option: bool,
        standing_player: Option<PlayerId>,
    ) -> Self {
        let mut cell = Cell {
            flags: 0,
            standing_player,
        };
        cell.set_flag(SELECTED, selected);
        cell.set_flag(SELECTABLE, selectable);
        cell.set_flag(PRESENTED_OPTION, presented_option);
        cell
    }

    fn set_flag(&mut self, flag: u8, on: bool) {
        if on {
            self.flags |= flag;
        } else {
            self.flags &= !flag;
        }
    }

    #[allow(missing_docs)]
    pub fn is_selected(&self) -> bool {
        self.flags & SELECTED != 0
    }

    #[allow(missing_docs)]
    pub fn is_selectable(&self) -> bool {
        self.flags & SELECTABLE != 0
    }

    #[allow(missing_docs)]
    pub fn is_presented_option(&self) -> bool {
        self.flags & PRESENTED_OPTION != 0
    }

    /// the player standing here, if any. The cell only refers to the player
    pub fn standing_player(&self) -> Option<PlayerId> {
        self.standing_player
    }

    pub(crate) fn toggle_selected(&mut self) {
        self.flags ^= SELECTED;
    }

    pub(crate) fn set_selectable(&mut self, selectable: bool) {
        self.set_flag(SELECTABLE, selectable);
    }

    pub(crate) fn set_presented_option(&mut self, presented: bool) {
        self.set_flag(PRESENTED_OPTION, presented);
    }

    pub(crate) fn set_standing_player(&mut self, player: Option<PlayerId>) {
        self.standing_player = player;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

/// The cells of a board, stored row major. Independent of the wall state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellGrid<D: Dimensions> {
    cells: Vec<Cell>,
    dimensions: D,
}

impl<D: Dimensions> CellGrid<D> {
    /// `size * size` empty cells
    pub fn initialize(dimensions: D) -> Self {
        CellGrid {
            cells: vec![Cell::empty(); dimensions.cell_count()],
            dimensions,
        }
    }

    #[allow(missing_docs)]
    pub fn dimensions(&self) -> D {
        self.dimensions
    }

    pub(crate) fn index_of(&self, row: i32, col: i32) -> Option<usize> {
        if self.dimensions.contains(row, col) {
            Some(row as usize * self.dimensions.size() as usize + col as usize)
        } else {
            None
        }
    }

    /// the cell at `(row, col)`, or `None` off the board
    pub fn find(&self, row: i32, col: i32) -> Option<Cell> {
        self.index_of(row, col).map(|i| self.cells[i])
    }

    pub(crate) fn find_mut(&mut self, row: i32, col: i32) -> Option<&mut Cell> {
        let index = self.index_of(row, col)?;
        self.cells.get_mut(index)
    }

    /// every cell as `(row, col, cell)`, row major
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let size = self.dimensions.size() as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| ((i / size) as i32, (i % size) as i32, *c))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }
}
