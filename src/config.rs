//! board configuration
use serde::{Deserialize, Serialize};

use crate::compact_representation::dimensions::STANDARD_BOARD_SIZE;
use crate::error::BoardError;

/// Settings a board is created from. Missing fields fall back to the reference game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    /// number of rows (and columns) of cells
    pub board_size: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            board_size: STANDARD_BOARD_SIZE,
        }
    }
}

impl BoardConfig {
    /// parse a config from a json string such as `{"boardSize": 9}`
    pub fn from_json_str(s: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_board() {
        assert_eq!(BoardConfig::default().board_size, 9);
    }

    #[test]
    fn test_from_json_str() {
        let c = BoardConfig::from_json_str("{\"boardSize\": 5}").unwrap();
        assert_eq!(c.board_size, 5);
        let c = BoardConfig::from_json_str("{}").unwrap();
        assert_eq!(c, BoardConfig::default());
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        let err = BoardConfig::from_json_str("{\"boardSize\": \"big\"}").unwrap_err();
        assert!(matches!(err, BoardError::Json(_)));
    }
}
