use tracing::trace;

use crate::{
    compact_representation::{cell_grid::Cell, dimensions::Dimensions},
    types::{CellUpdatableBoard, PlayerId},
};

use super::WallInteractionController;

impl<D: Dimensions> WallInteractionController<D> {
    fn update_cell(&mut self, row: i32, col: i32, f: impl FnOnce(&mut Cell)) -> bool {
        match self.cells.find_mut(row, col) {
            Some(cell) => {
                f(cell);
                true
            }
            None => {
                trace!(row, col, "ignoring update of off board cell");
                false
            }
        }
    }
}

impl<D: Dimensions> CellUpdatableBoard for WallInteractionController<D> {
    fn toggle_cell_selected(&mut self, row: i32, col: i32) -> bool {
        self.update_cell(row, col, |c| c.toggle_selected())
    }

    fn set_cell_selectable(&mut self, row: i32, col: i32, selectable: bool) -> bool {
        self.update_cell(row, col, |c| c.set_selectable(selectable))
    }

    fn set_presented_option(&mut self, row: i32, col: i32, presented: bool) -> bool {
        self.update_cell(row, col, |c| c.set_presented_option(presented))
    }

    fn place_player(&mut self, row: i32, col: i32, player: PlayerId) -> bool {
        self.update_cell(row, col, |c| c.set_standing_player(Some(player)))
    }

    fn remove_player(&mut self, row: i32, col: i32) -> bool {
        self.update_cell(row, col, |c| c.set_standing_player(None))
    }

    fn clear_players(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_standing_player(None);
        }
    }
}
