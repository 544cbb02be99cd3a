//! We can represent the size of a board in a couple of ways
//!
//! Quoridor boards are always square, so every dimension only has to report one number.
//! We have a [Square] struct which stores the size at runtime, and [Fixed] which is a
//! board size fixed at compile time.

use core::fmt::Debug;
use std::hash::Hash;

/// The reference quoridor board is 9 cells across
pub const STANDARD_BOARD_SIZE: u8 = 9;

/// Trait that all different Dimensions must implement
pub trait Dimensions: Debug + Copy + Hash {
    /// Convert from a board size to this dimension
    fn from_size(size: u8) -> Self;

    /// Get the number of rows (and columns) of this dimension
    fn size(&self) -> u8;

    /// Number of cells on the board
    fn cell_count(&self) -> usize {
        let size = self.size() as usize;
        size * size
    }

    /// Whether `(row, col)` falls inside the board
    fn contains(&self, row: i32, col: i32) -> bool {
        let size = self.size() as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// A square board whose size is only known at runtime
pub struct Square {
    size: u8,
}

impl Dimensions for Square {
    fn size(&self) -> u8 {
        self.size
    }

    fn from_size(size: u8) -> Self {
        Self { size }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// A fixed size board
pub struct Fixed<const N: u8>;

impl<const N: u8> Dimensions for Fixed<N> {
    fn size(&self) -> u8 {
        N
    }

    /// the size is fixed by `N`, so the argument is ignored. Check `size()` afterwards when
    /// the requested size comes from untrusted input
    fn from_size(_size: u8) -> Self {
        Self
    }
}

/// Alias for a [Fixed] board at the reference 9x9 size
pub type Standard = Fixed<STANDARD_BOARD_SIZE>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let d = Square::from_size(3);
        assert!(d.contains(0, 0));
        assert!(d.contains(2, 2));
        assert!(!d.contains(-1, 0));
        assert!(!d.contains(0, 3));
        assert_eq!(d.cell_count(), 9);
    }

    #[test]
    fn test_standard_size() {
        assert_eq!(Standard::from_size(9).size(), 9);
        assert_eq!(Standard::from_size(9).cell_count(), 81);
    }
}
