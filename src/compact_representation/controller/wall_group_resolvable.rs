use crate::{
    compact_representation::{dimensions::Dimensions, resolver, WallPlacement},
    types::{SegmentKey, WallGroupResolvableBoard},
};

use super::WallInteractionController;

impl<D: Dimensions> WallGroupResolvableBoard for WallInteractionController<D> {
    fn resolve_group(&self, key: SegmentKey) -> Option<WallPlacement> {
        resolver::resolve_group(&self.walls, key)
    }
}
