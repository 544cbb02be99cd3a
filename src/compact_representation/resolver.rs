//! Working out which segments make up one physical wall.
//!
//! A physical wall covers two wall slots of the same orientation plus the junction between
//! them. Given the slot the pointer is over, we first try the pairing that extends the wall
//! left (horizontal) or down (vertical) and, failing that, the mirrored pairing. Near the
//! board edge, or next to placed walls, both attempts can fail, in which case there is no
//! placement at all: we never hand back a partial wall.
use tracing::{instrument, trace};

use crate::types::{Orientation, SegmentKey};

use super::dimensions::Dimensions;
use super::wall_grid::WallGrid;

/// number of segments in one physical wall
pub const PLACEMENT_SIZE: usize = 3;

/// The segments of one physical wall: the anchor slot, the junction, and the partner slot,
/// in that order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallPlacement([SegmentKey; PLACEMENT_SIZE]);

impl WallPlacement {
    /// the keys in the order they were assembled
    pub fn segments(&self) -> &[SegmentKey; PLACEMENT_SIZE] {
        &self.0
    }

    /// the slot the placement was resolved from
    pub fn anchor(&self) -> SegmentKey {
        self.0[0]
    }

    /// the junction in the middle of the wall
    pub fn junction(&self) -> SegmentKey {
        self.0[1]
    }

    /// the second slot of the wall
    pub fn partner(&self) -> SegmentKey {
        self.0[2]
    }

    #[allow(missing_docs)]
    pub fn contains(&self, key: SegmentKey) -> bool {
        self.0.contains(&key)
    }

    #[allow(missing_docs)]
    pub fn iter(&self) -> impl Iterator<Item = SegmentKey> + '_ {
        self.0.iter().copied()
    }
}

fn is_free<D: Dimensions>(grid: &WallGrid<D>, key: SegmentKey) -> bool {
    grid.find(key).map_or(false, |s| !s.is_occupied())
}

fn pair<D: Dimensions>(
    grid: &WallGrid<D>,
    anchor: SegmentKey,
    junction: SegmentKey,
    partner: SegmentKey,
) -> Option<WallPlacement> {
    if is_free(grid, junction) && is_free(grid, partner) {
        Some(WallPlacement([anchor, junction, partner]))
    } else {
        None
    }
}

/// Resolves the physical wall placement anchored at `key`.
///
/// Returns `None` when `key` is off the board, is a junction, is already occupied, or when
/// neither pairing yields three unoccupied segments. Pure: the grid isn't touched, so this
/// can be called speculatively.
#[instrument(level = "trace", skip_all)]
pub fn resolve_group<D: Dimensions>(
    grid: &WallGrid<D>,
    key: SegmentKey,
) -> Option<WallPlacement> {
    let anchor = grid.find(key)?;
    if anchor.is_occupied() {
        trace!(%key, "segment already placed");
        return None;
    }

    let primary = match key.orientation {
        Orientation::Horizontal => pair(
            grid,
            key,
            key.offset(0, -1, Orientation::None),
            key.offset(0, -1, Orientation::Horizontal),
        ),
        Orientation::Vertical => pair(
            grid,
            key,
            key.offset(0, 0, Orientation::None),
            key.offset(1, 0, Orientation::Vertical),
        ),
        Orientation::None => return None,
    };
    if primary.is_some() {
        return primary;
    }

    let mirrored = match key.orientation {
        Orientation::Horizontal => {
            let right = key.offset(0, 1, Orientation::Horizontal);
            // no further fallback on the right hand side
            if !is_free(grid, right) {
                return None;
            }
            pair(grid, key, key.offset(0, 0, Orientation::None), right)
        }
        Orientation::Vertical => pair(
            grid,
            key,
            key.offset(-1, 0, Orientation::None),
            key.offset(-1, 0, Orientation::Vertical),
        ),
        Orientation::None => None,
    };
    if mirrored.is_none() {
        trace!(%key, "no placement at segment");
    }
    mirrored
}
