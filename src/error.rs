//! errors raised when building boards
use thiserror::Error;

use crate::types::SegmentKey;

/// Errors raised while building a board or converting a snapshot in to one.
///
/// Hovering, committing and looking up segments never fail; these only come out of
/// construction and conversion.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum BoardError {
    #[error("board size {0} is out of range [1, 255]")]
    InvalidBoardSize(usize),

    #[error("snapshot is for a {actual}x{actual} board, expected {expected}x{expected}")]
    SizeMismatch { expected: u8, actual: u8 },

    #[error("snapshot has {actual} wall segments, expected {expected}")]
    SegmentCount { expected: usize, actual: usize },

    #[error("snapshot has {actual} cells, expected {expected}")]
    CellCount { expected: usize, actual: usize },

    #[error("wall segment {0} is off the board")]
    SegmentOutOfBounds(SegmentKey),

    #[error("cell ({row},{col}) is off the board")]
    CellOutOfBounds { row: i32, col: i32 },

    #[error("wall segment {0} appears more than once")]
    DuplicateSegment(SegmentKey),

    #[error("cell ({row},{col}) appears more than once")]
    DuplicateCell { row: i32, col: i32 },

    #[error("wall segment {0} is both occupied and selected")]
    SelectedOccupiedSegment(SegmentKey),

    #[error("snapshot names more than 256 distinct players")]
    TooManyPlayers,

    #[error("unknown player id: {0}")]
    UnknownPlayer(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
