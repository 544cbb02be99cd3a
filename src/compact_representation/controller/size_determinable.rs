use crate::{compact_representation::dimensions::Dimensions, types::SizeDeterminableBoard};

use super::WallInteractionController;

impl<D: Dimensions> SizeDeterminableBoard for WallInteractionController<D> {
    fn board_size(&self) -> u8 {
        self.walls.dimensions().size()
    }
}
