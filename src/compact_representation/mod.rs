//! The in memory board: flat, indexed grids of wall segments and cells, the resolver that
//! groups segments in to physical walls, and the controller that owns them.
//!
//! Everything is keyed by `(row, col, orientation)` directly; nothing is looked up by
//! scanning and comparing fields.

pub mod dimensions;

mod cell_grid;
mod controller;
mod resolver;
mod wall_grid;

pub use cell_grid::{Cell, CellGrid};
pub use controller::WallInteractionController;
pub use resolver::{resolve_group, WallPlacement, PLACEMENT_SIZE};
pub use wall_grid::{Segment, WallGrid};

use dimensions::{Square, Standard};

/// A 9x9 board with its size fixed at compile time
pub type StandardBoard = WallInteractionController<Standard>;

/// A board with its size picked at runtime
pub type SquareBoard = WallInteractionController<Square>;
