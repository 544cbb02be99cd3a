#![allow(missing_docs)]
//! types to match the board snapshot handed to the rendering layer
use crate::types::{Orientation, SegmentKey};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Struct that matches a wall segment record
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallState {
    pub row: i32,
    pub col: i32,
    pub orientation: Orientation,
    pub selected: bool,
    pub occupied: bool,
}

impl WallState {
    pub fn key(&self) -> SegmentKey {
        SegmentKey::new(self.row, self.col, self.orientation)
    }
}

/// Struct that matches a player reference on a cell
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub player_id: String,
}

/// Struct that matches a cell record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CellState {
    pub row: i32,
    pub col: i32,
    pub standing_player: Option<PlayerState>,
    pub presented_option: bool,
    pub selected: bool,
    pub selectable: bool,
}

/// Root snapshot of a board, you probably want to do:
/// ```
/// # use quoridor_wall_types::wire_representation::Board;
/// # let body = b"{\"size\":1,\"walls\":[{\"row\":0,\"col\":0,\"orientation\":\"horizontal\",\"selected\":false,\"occupied\":false},{\"row\":0,\"col\":0,\"orientation\":\"vertical\",\"selected\":false,\"occupied\":false},{\"row\":0,\"col\":0,\"orientation\":\"none\",\"selected\":false,\"occupied\":false}],\"cells\":[{\"row\":0,\"col\":0,\"standingPlayer\":null,\"presentedOption\":false,\"selected\":false,\"selectable\":true}]}";
/// let b: Result<Board, _> = serde_json::from_slice(body);
/// # assert!(b.is_ok());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub size: u8,
    pub walls: Vec<WallState>,
    pub cells: Vec<CellState>,
}

impl Board {
    pub fn off_board(&self, row: i32, col: i32) -> bool {
        row < 0 || row >= self.size as i32 || col < 0 || col >= self.size as i32
    }

    /// whether the renderer draws a segment at all. The last column has no vertical slot,
    /// the last row no horizontal slot, and junctions need both
    pub fn is_drawn(&self, key: SegmentKey) -> bool {
        if self.off_board(key.row, key.col) {
            return false;
        }
        let last = self.size as i32 - 1;
        match key.orientation {
            Orientation::Vertical => key.col < last,
            Orientation::Horizontal => key.row < last,
            Orientation::None => key.col < last && key.row < last,
        }
    }
}

fn wall_char(wall: Option<&WallState>) -> char {
    match wall {
        Some(w) if w.occupied => '#',
        Some(w) if w.selected => '*',
        _ => ' ',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let walls: FxHashMap<SegmentKey, &WallState> =
            self.walls.iter().map(|w| (w.key(), w)).collect();
        let cells: FxHashMap<(i32, i32), &CellState> =
            self.cells.iter().map(|c| ((c.row, c.col), c)).collect();
        let size = self.size as i32;

        for row in 0..size {
            for col in 0..size {
                let cell = cells.get(&(row, col)).and_then(|c| c.standing_player.as_ref());
                match cell.and_then(|p| p.player_id.chars().next()) {
                    Some(initial) => write!(f, "{}", initial)?,
                    None => write!(f, ".")?,
                }
                let key = SegmentKey::new(row, col, Orientation::Vertical);
                if self.is_drawn(key) {
                    write!(f, "{}", wall_char(walls.get(&key).copied()))?;
                }
            }
            writeln!(f)?;

            if row < size - 1 {
                for col in 0..size {
                    for orientation in [Orientation::Horizontal, Orientation::None].iter() {
                        let key = SegmentKey::new(row, col, *orientation);
                        if self.is_drawn(key) {
                            write!(f, "{}", wall_char(walls.get(&key).copied()))?;
                        }
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_fixture;

    fn fixture() -> Board {
        board_fixture(include_str!("../../fixtures/two_players_3x3.json"))
    }

    #[test]
    fn test_fixture_shape() {
        let b = fixture();
        assert_eq!(b.size, 3);
        assert_eq!(b.walls.len(), 27);
        assert_eq!(b.cells.len(), 9);
        assert_eq!(
            b.cells[1].standing_player,
            Some(PlayerState {
                player_id: "A".to_string()
            })
        );
    }

    #[test]
    fn test_cell_fields_are_camel_case() {
        let b = fixture();
        let v = serde_json::to_value(&b.cells[0]).unwrap();
        assert!(v.get("standingPlayer").is_some());
        assert!(v.get("presentedOption").is_some());
        let v = serde_json::to_value(&b.cells[1]).unwrap();
        assert_eq!(v["standingPlayer"]["playerId"], "A");
    }

    #[test]
    fn test_is_drawn() {
        let b = fixture();
        assert!(b.is_drawn(SegmentKey::new(0, 0, Orientation::Vertical)));
        assert!(!b.is_drawn(SegmentKey::new(0, 2, Orientation::Vertical)));
        assert!(b.is_drawn(SegmentKey::new(1, 2, Orientation::Horizontal)));
        assert!(!b.is_drawn(SegmentKey::new(2, 0, Orientation::Horizontal)));
        assert!(b.is_drawn(SegmentKey::new(1, 1, Orientation::None)));
        assert!(!b.is_drawn(SegmentKey::new(1, 2, Orientation::None)));
        assert!(!b.is_drawn(SegmentKey::new(-1, 0, Orientation::None)));
    }

    #[test]
    fn test_display() {
        let mut b = fixture();
        for w in b.walls.iter_mut() {
            let k = w.key();
            if k == SegmentKey::new(0, 0, Orientation::Horizontal)
                || k == SegmentKey::new(0, 0, Orientation::None)
                || k == SegmentKey::new(0, 1, Orientation::Horizontal)
            {
                w.occupied = true;
            }
            if k == SegmentKey::new(1, 1, Orientation::Vertical) {
                w.selected = true;
            }
        }
        let expected = ". A .\n###  \n. .*.\n     \n. B .\n";
        assert_eq!(format!("{}", b), expected);
    }
}
