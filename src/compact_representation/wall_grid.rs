use crate::types::{Orientation, SegmentKey};

use super::dimensions::Dimensions;

const SELECTED: u8 = 0x01;
const OCCUPIED: u8 = 0x02;

/// A single wall slot or junction. Its key is implied by where it sits in the [WallGrid]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    flags: u8,
}

impl Segment {
    /// a segment that is neither highlighted nor placed
    pub fn empty() -> Self {
        Segment { flags: 0 }
    }

    pub(crate) fn from_flags(selected: bool, occupied: bool) -> Self {
        let mut flags = 0;
        if selected {
            flags |= SELECTED;
        }
        if occupied {
            flags |= OCCUPIED;
        }
        Segment { flags }
    }

    /// transient hover highlight
    pub fn is_selected(&self) -> bool {
        self.flags & SELECTED != 0
    }

    /// permanently placed. Terminal: nothing clears this
    pub fn is_occupied(&self) -> bool {
        self.flags & OCCUPIED != 0
    }

    pub(crate) fn toggle_selected(&mut self) {
        debug_assert!(!self.is_occupied(), "placed segments never change highlight");
        self.flags ^= SELECTED;
    }

    /// places the segment, dropping its highlight
    pub(crate) fn occupy(&mut self) {
        self.flags = OCCUPIED;
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::empty()
    }
}

/// The authoritative wall state of a board: one segment per orientation for every
/// `(row, col)`, stored row major with the orientations in `Orientation::as_index` order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WallGrid<D: Dimensions> {
    segments: Vec<Segment>,
    dimensions: D,
}

impl<D: Dimensions> WallGrid<D> {
    /// every segment of the board, none highlighted and none placed
    pub fn initialize(dimensions: D) -> Self {
        WallGrid {
            segments: vec![Segment::empty(); dimensions.cell_count() * Orientation::COUNT],
            dimensions,
        }
    }

    #[allow(missing_docs)]
    pub fn dimensions(&self) -> D {
        self.dimensions
    }

    /// total number of segments, always `3 * size * size`
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// only true for a zero sized board, which can't be constructed through the public api
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn index_of(&self, key: SegmentKey) -> Option<usize> {
        if !self.dimensions.contains(key.row, key.col) {
            return None;
        }
        let size = self.dimensions.size() as usize;
        let cell = key.row as usize * size + key.col as usize;
        Some(cell * Orientation::COUNT + key.orientation.as_index())
    }

    /// the key of the segment stored at `index`
    pub fn key_at(&self, index: usize) -> SegmentKey {
        let size = self.dimensions.size() as usize;
        let cell = index / Orientation::COUNT;
        SegmentKey {
            row: (cell / size) as i32,
            col: (cell % size) as i32,
            orientation: Orientation::from_index(index % Orientation::COUNT),
        }
    }

    /// the segment at `key`, or `None` if the key is off the board
    pub fn find(&self, key: SegmentKey) -> Option<Segment> {
        self.index_of(key).map(|i| self.segments[i])
    }

    pub(crate) fn find_mut(&mut self, key: SegmentKey) -> Option<&mut Segment> {
        let index = self.index_of(key)?;
        self.segments.get_mut(index)
    }

    /// every segment with its key, in grid order
    pub fn iter(&self) -> impl Iterator<Item = (SegmentKey, Segment)> + '_ {
        self.segments
            .iter()
            .enumerate()
            .map(move |(i, s)| (self.key_at(i), *s))
    }

    /// occupies every highlighted segment and returns their keys
    pub(crate) fn occupy_selected(&mut self) -> Vec<SegmentKey> {
        let mut placed = vec![];
        for i in 0..self.segments.len() {
            if self.segments[i].is_selected() {
                self.segments[i].occupy();
                placed.push(self.key_at(i));
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;

    use super::*;
    use crate::compact_representation::dimensions::{Square, Standard};

    #[test]
    fn test_initialize_has_three_segments_per_cell() {
        let grid = WallGrid::initialize(Square::from_size(9));
        assert_eq!(grid.len(), 3 * 81);
        assert!(grid.iter().all(|(_, s)| !s.is_selected() && !s.is_occupied()));
    }

    #[test]
    fn test_every_key_is_found_once() {
        let grid = WallGrid::initialize(Standard::from_size(9));
        let mut seen = fxhash::FxHashSet::default();
        for (row, col, orientation) in iproduct!(0..9, 0..9, Orientation::all().iter().copied()) {
            let key = SegmentKey::new(row, col, orientation);
            let index = grid.index_of(key).unwrap();
            assert_eq!(grid.key_at(index), key);
            assert!(seen.insert(index));
        }
        assert_eq!(seen.len(), grid.len());
    }

    #[test]
    fn test_find_off_board_is_none() {
        let grid = WallGrid::initialize(Square::from_size(9));
        assert!(grid.find(SegmentKey::new(0, -1, Orientation::None)).is_none());
        assert!(grid.find(SegmentKey::new(9, 0, Orientation::Vertical)).is_none());
        assert!(grid.find(SegmentKey::new(8, 8, Orientation::None)).is_some());
    }

    #[test]
    fn test_segment_flags() {
        let mut s = Segment::empty();
        s.toggle_selected();
        assert!(s.is_selected());
        s.toggle_selected();
        assert!(!s.is_selected());
        s.toggle_selected();
        s.occupy();
        assert!(s.is_occupied());
        assert!(!s.is_selected());
        assert_eq!(Segment::from_flags(true, false), {
            let mut s = Segment::empty();
            s.toggle_selected();
            s
        });
    }

    #[test]
    fn test_occupy_selected_only_touches_selected() {
        let mut grid = WallGrid::initialize(Square::from_size(3));
        let key = SegmentKey::new(1, 2, Orientation::Vertical);
        grid.find_mut(key).unwrap().toggle_selected();
        let placed = grid.occupy_selected();
        assert_eq!(placed, vec![key]);
        assert_eq!(grid.iter().filter(|(_, s)| s.is_occupied()).count(), 1);
        assert!(grid.occupy_selected().is_empty());
    }
}
