use crate::{
    compact_representation::{dimensions::Dimensions, Segment},
    types::{SegmentKey, SegmentLookupBoard},
};

use super::WallInteractionController;

impl<D: Dimensions> SegmentLookupBoard for WallInteractionController<D> {
    fn lookup(&self, key: SegmentKey) -> Option<Segment> {
        self.walls.find(key)
    }
}
