//! various types that are useful for working with a quoridor board
use crate::compact_representation::{Segment, WallPlacement};
use crate::error::BoardError;
use crate::wire_representation::Board;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Represents the player IDs for a given board. This should be established once when the
/// board is created and then stored, so that `PlayerId`s are stable throughout the game.
pub type PlayerIDMap = HashMap<String, PlayerId>;

/// The orientation of a wall segment at a grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[allow(missing_docs)]
    Horizontal,
    #[allow(missing_docs)]
    Vertical,
    /// the junction piece at a grid intersection, shared by up to four cells
    None,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::None => write!(f, "none"),
        }
    }
}

impl Orientation {
    /// number of orientations, and so segments, per grid coordinate
    pub const COUNT: usize = 3;

    /// returns all orientations, in `as_index` order
    pub fn all() -> [Orientation; Orientation::COUNT] {
        [
            Orientation::Horizontal,
            Orientation::Vertical,
            Orientation::None,
        ]
    }

    /// converts this orientation to a usize index. indices are the same order as the `Orientation::all()` method
    pub fn as_index(&self) -> usize {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
            Orientation::None => 2,
        }
    }

    /// converts a usize index to an orientation
    pub fn from_index(index: usize) -> Orientation {
        match index {
            0 => Orientation::Horizontal,
            1 => Orientation::Vertical,
            2 => Orientation::None,
            _ => panic!("invalid index"),
        }
    }
}

/// The composite key that identifies one wall segment.
///
/// Coordinates are signed so that neighbour arithmetic at the board edge (e.g. `col - 1` at
/// column 0) produces a key that simply isn't found rather than wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentKey {
    #[allow(missing_docs)]
    pub row: i32,
    #[allow(missing_docs)]
    pub col: i32,
    #[allow(missing_docs)]
    pub orientation: Orientation,
}

impl SegmentKey {
    /// build a key from its parts
    pub fn new(row: i32, col: i32, orientation: Orientation) -> Self {
        SegmentKey {
            row,
            col,
            orientation,
        }
    }

    /// the key `row_delta` rows and `col_delta` columns away, with the given orientation
    pub fn offset(&self, row_delta: i32, col_delta: i32, orientation: Orientation) -> Self {
        SegmentKey {
            row: self.row + row_delta,
            col: self.col + col_delta,
            orientation,
        }
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.row, self.col, self.orientation)
    }
}

/// token to represent a player id
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// convert this player ID to a usize
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl Serialize for PlayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// builds a player ID map for a given board snapshot, mapping the players standing on
/// its cells to integers in the order they are first seen (row major). Instead of calling
/// this on every snapshot you are given, you should call this once per game and store the
/// result, so that a given player keeps the same integer ID throughout a game.
///
/// Fails with [BoardError::TooManyPlayers] when the snapshot names more distinct players
/// than a [PlayerId] can hold
pub fn build_player_id_map(board: &Board) -> Result<PlayerIDMap, BoardError> {
    let mut hm = HashMap::new();
    let mut next = Some(0u8);
    for cell in board.cells.iter() {
        if let Some(player) = &cell.standing_player {
            if !hm.contains_key(&player.player_id) {
                let id = next.ok_or(BoardError::TooManyPlayers)?;
                hm.insert(player.player_id.clone(), PlayerId(id));
                next = id.checked_add(1);
            }
        }
    }

    Ok(hm)
}

/// a board for which the size of the (square) grid can be determined
pub trait SizeDeterminableBoard {
    /// the number of rows, which is also the number of columns
    fn board_size(&self) -> u8;
}

/// a board whose wall segments can be looked up by key
pub trait SegmentLookupBoard {
    /// look up the segment at `key`. `None` is a normal outcome: it means there is no segment
    /// there, usually because the key is past the board edge
    fn lookup(&self, key: SegmentKey) -> Option<Segment>;

    /// convenience form of `lookup` taking the key's parts
    fn lookup_at(&self, row: i32, col: i32, orientation: Orientation) -> Option<Segment> {
        self.lookup(SegmentKey::new(row, col, orientation))
    }
}

/// a board which can work out the physical wall placement a segment belongs to
pub trait WallGroupResolvableBoard: SegmentLookupBoard {
    /// the placement anchored at `key`, or `None` when no complete, unoccupied placement
    /// exists there. Never mutates the board
    fn resolve_group(&self, key: SegmentKey) -> Option<WallPlacement>;
}

/// a board which reacts to pointer hover and click events on its walls
pub trait WallInteractiveBoard: WallGroupResolvableBoard {
    /// flip the highlight of every segment in the placement anchored at `key`. The same call
    /// is used for pointer-enter and pointer-leave. Returns the toggled placement, if any
    fn hover(&mut self, key: SegmentKey) -> Option<WallPlacement>;

    /// place every currently highlighted segment on the board, returning the keys that were
    /// placed in grid order
    fn commit(&mut self) -> Vec<SegmentKey>;
}

/// a board whose cell display state can be updated. All cell changes go through here;
/// out of range coordinates are ignored and reported by returning `false`
pub trait CellUpdatableBoard {
    /// flip the `selected` flag of a cell
    fn toggle_cell_selected(&mut self, row: i32, col: i32) -> bool;

    /// set the `selectable` flag of a cell
    fn set_cell_selectable(&mut self, row: i32, col: i32, selectable: bool) -> bool;

    /// set the `presentedOption` flag of a cell
    fn set_presented_option(&mut self, row: i32, col: i32, presented: bool) -> bool;

    /// record that `player` is standing on a cell
    fn place_player(&mut self, row: i32, col: i32, player: PlayerId) -> bool;

    /// clear the standing player of a cell
    fn remove_player(&mut self, row: i32, col: i32) -> bool;

    /// clear the standing player of every cell
    fn clear_players(&mut self);
}
