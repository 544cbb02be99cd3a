#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for working with a quoridor style wall-blocking board.
//! The goal is to resolve which wall segments make up one physical wall, and to
//! drive the hover/click protocol a board UI uses to highlight and place walls.
//! you will likely be most interested in the `WallInteractionController` type
//! (or its `StandardBoard` alias), which owns the board state and implements the
//! lookup, resolution and interaction traits in [types].
//! ```
//! use quoridor_wall_types::compact_representation::StandardBoard;
//! use quoridor_wall_types::types::{Orientation, SegmentKey, WallInteractiveBoard};
//!
//! let mut board = StandardBoard::default();
//! let wall = SegmentKey::new(0, 0, Orientation::Horizontal);
//! // pointer enters the slot: the whole wall is highlighted
//! let placement = board.hover(wall).unwrap();
//! assert_eq!(placement.partner(), SegmentKey::new(0, 1, Orientation::Horizontal));
//! // click: the highlighted wall is placed
//! assert_eq!(board.commit().len(), 3);
//! // pointer leaves: placed walls never highlight again
//! assert!(board.hover(wall).is_none());
//! ```

use wire_representation::Board;

pub mod compact_representation;
pub mod config;
pub mod error;
pub mod types;
pub mod wire_representation;

/// Loads a board snapshot fixture from a given string
pub fn board_fixture(board_fixture: &str) -> Board {
    let b: Result<Board, _> = serde_json::from_str(board_fixture);
    b.expect("the json literal is valid")
}
