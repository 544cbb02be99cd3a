use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use crate::{
    compact_representation::{cell_grid::Cell, dimensions::Dimensions, wall_grid::Segment},
    error::BoardError,
    types::{Orientation, PlayerIDMap, PlayerId},
    wire_representation::{Board, CellState, PlayerState, WallState},
};

use super::WallInteractionController;

impl<D: Dimensions> WallInteractionController<D> {
    /// Rebuilds a controller from a snapshot.
    ///
    /// The snapshot must hold every segment and every cell of the board exactly once, and no
    /// segment may be both placed and highlighted.
    pub fn from_wire(board: &Board, player_ids: &PlayerIDMap) -> Result<Self, BoardError> {
        if board.size == 0 {
            return Err(BoardError::InvalidBoardSize(0));
        }
        let dimensions = D::from_size(board.size);
        if dimensions.size() != board.size {
            return Err(BoardError::SizeMismatch {
                expected: dimensions.size(),
                actual: board.size,
            });
        }

        let mut controller = Self::new(dimensions);

        let expected = dimensions.cell_count() * Orientation::COUNT;
        if board.walls.len() != expected {
            return Err(BoardError::SegmentCount {
                expected,
                actual: board.walls.len(),
            });
        }
        let mut seen = FxHashSet::default();
        for wall in board.walls.iter() {
            let key = wall.key();
            let segment = controller
                .walls
                .find_mut(key)
                .ok_or(BoardError::SegmentOutOfBounds(key))?;
            if !seen.insert(key) {
                return Err(BoardError::DuplicateSegment(key));
            }
            if wall.selected && wall.occupied {
                return Err(BoardError::SelectedOccupiedSegment(key));
            }
            *segment = Segment::from_flags(wall.selected, wall.occupied);
        }

        let expected = dimensions.cell_count();
        if board.cells.len() != expected {
            return Err(BoardError::CellCount {
                expected,
                actual: board.cells.len(),
            });
        }
        let claimed: FxHashSet<PlayerId> = player_ids.values().copied().collect();
        let mut seen = FxHashSet::default();
        for cell in board.cells.iter() {
            let (row, col) = (cell.row, cell.col);
            let standing_player = match &cell.standing_player {
                Some(p) => Some(
                    resolve_player(&p.player_id, player_ids, &claimed)
                        .ok_or_else(|| BoardError::UnknownPlayer(p.player_id.clone()))?,
                ),
                None => None,
            };
            let slot = controller
                .cells
                .find_mut(row, col)
                .ok_or(BoardError::CellOutOfBounds { row, col })?;
            if !seen.insert((row, col)) {
                return Err(BoardError::DuplicateCell { row, col });
            }
            *slot = Cell::from_parts(
                cell.selected,
                cell.selectable,
                cell.presented_option,
                standing_player,
            );
        }

        Ok(controller)
    }

    /// A snapshot of the board for the rendering layer, walls and cells in grid order.
    ///
    /// Players missing from `player_ids` are named by their numeric id, which `from_wire`
    /// reads back as long as no name in the map owns that id
    pub fn to_wire(&self, player_ids: &PlayerIDMap) -> Board {
        let names: FxHashMap<PlayerId, &String> =
            player_ids.iter().map(|(name, id)| (*id, name)).collect();

        let walls = self
            .walls
            .iter()
            .map(|(key, segment)| WallState {
                row: key.row,
                col: key.col,
                orientation: key.orientation,
                selected: segment.is_selected(),
                occupied: segment.is_occupied(),
            })
            .collect_vec();

        let cells = self
            .cells
            .iter()
            .map(|(row, col, cell)| CellState {
                row,
                col,
                standing_player: cell.standing_player().map(|id| PlayerState {
                    player_id: names
                        .get(&id)
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| id.as_usize().to_string()),
                }),
                presented_option: cell.is_presented_option(),
                selected: cell.is_selected(),
                selectable: cell.is_selectable(),
            })
            .collect_vec();

        Board {
            size: self.walls.dimensions().size(),
            walls,
            cells,
        }
    }
}

/// a player name from a snapshot: a name in the map, or the numeric form `to_wire` gives
/// players the map doesn't know
fn resolve_player(
    name: &str,
    player_ids: &PlayerIDMap,
    claimed: &FxHashSet<PlayerId>,
) -> Option<PlayerId> {
    if let Some(id) = player_ids.get(name) {
        return Some(*id);
    }
    let id = PlayerId(name.parse().ok()?);
    if claimed.contains(&id) {
        None
    } else {
        Some(id)
    }
}
