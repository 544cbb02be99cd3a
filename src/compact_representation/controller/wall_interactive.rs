use tracing::{debug, trace};

use crate::{
    compact_representation::{dimensions::Dimensions, WallPlacement},
    types::{SegmentKey, WallGroupResolvableBoard, WallInteractiveBoard},
};

use super::WallInteractionController;

impl<D: Dimensions> WallInteractiveBoard for WallInteractionController<D> {
    fn hover(&mut self, key: SegmentKey) -> Option<WallPlacement> {
        let placement = self.resolve_group(key)?;
        for k in placement.iter() {
            if let Some(segment) = self.walls.find_mut(k) {
                segment.toggle_selected();
            }
        }
        trace!(%key, "toggled wall highlight");
        Some(placement)
    }

    /// Places whatever is highlighted anywhere on the board, regardless of which wall was
    /// clicked. Only one placement can be highlighted at a time under the hover model
    fn commit(&mut self) -> Vec<SegmentKey> {
        let placed = self.walls.occupy_selected();
        debug!(placed = placed.len(), "committed highlighted wall segments");
        placed
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::compact_representation::{StandardBoard, PLACEMENT_SIZE};
    use crate::types::{
        Orientation, SegmentKey, SegmentLookupBoard, WallGroupResolvableBoard, WallInteractiveBoard,
    };

    fn h(row: i32, col: i32) -> SegmentKey {
        SegmentKey::new(row, col, Orientation::Horizontal)
    }

    fn v(row: i32, col: i32) -> SegmentKey {
        SegmentKey::new(row, col, Orientation::Vertical)
    }

    fn j(row: i32, col: i32) -> SegmentKey {
        SegmentKey::new(row, col, Orientation::None)
    }

    #[test]
    fn test_hover_highlights_placement() {
        let mut b = StandardBoard::default();
        let p = b.hover(h(0, 0)).unwrap();
        assert_eq!(p.segments(), &[h(0, 0), j(0, 0), h(0, 1)]);
        assert_eq!(
            b.selected_segments().collect::<Vec<_>>(),
            vec![h(0, 0), j(0, 0), h(0, 1)]
        );
    }

    #[test]
    fn test_enter_then_leave_restores_highlight() {
        let mut b = StandardBoard::default();
        let before = b.clone();
        b.hover(v(4, 4));
        assert_eq!(b.selected_segments().count(), PLACEMENT_SIZE);
        b.hover(v(4, 4));
        assert_eq!(b, before);
    }

    #[test]
    fn test_hover_on_nothing_changes_nothing() {
        let mut b = StandardBoard::default();
        let before = b.clone();
        assert!(b.hover(j(2, 2)).is_none());
        assert!(b.hover(h(-3, 12)).is_none());
        assert_eq!(b, before);
    }

    #[test]
    fn test_commit_places_highlighted_segments() {
        let mut b = StandardBoard::default();
        b.hover(v(8, 0));
        let placed = b.commit();
        assert_eq!(placed, vec![v(7, 0), j(7, 0), v(8, 0)]);
        for k in placed.iter() {
            let s = b.lookup(*k).unwrap();
            assert!(s.is_occupied());
            assert!(!s.is_selected());
        }
        assert_eq!(b.selected_segments().count(), 0);
    }

    #[test]
    fn test_commit_with_nothing_highlighted_is_a_noop() {
        let mut b = StandardBoard::default();
        let before = b.clone();
        assert!(b.commit().is_empty());
        assert_eq!(b, before);
    }

    #[test]
    fn test_rehover_after_commit_is_empty() {
        let mut b = StandardBoard::default();
        let p = b.hover(h(6, 3)).unwrap();
        b.commit();
        for k in p.iter() {
            assert!(b.resolve_group(k).is_none());
            assert!(b.hover(k).is_none());
            assert!(b.lookup(k).unwrap().is_occupied());
            assert!(!b.lookup(k).unwrap().is_selected());
        }
    }

    #[test]
    fn test_pointer_leaving_after_click_leaves_wall_placed() {
        let mut b = StandardBoard::default();
        let p = b.hover(h(2, 5)).unwrap();
        b.commit();
        // the leave event of the same pointer gesture
        assert!(b.hover(h(2, 5)).is_none());
        assert_eq!(b.occupied_segments().collect::<Vec<_>>().len(), 3);
        assert!(p.iter().all(|k| b.lookup(k).unwrap().is_occupied()));
    }

    #[test]
    fn test_neighbouring_placement_routes_around_placed_wall() {
        let mut b = StandardBoard::default();
        b.hover(h(3, 3));
        b.commit();
        // h(3,3) took j(3,2) and h(3,2); the slot to its right pairs further right
        let p = b.hover(h(3, 4)).unwrap();
        assert_eq!(p.segments(), &[h(3, 4), j(3, 4), h(3, 5)]);
    }

    #[test]
    fn test_random_walk_keeps_invariants() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut b = StandardBoard::default();
        let mut hovered: Option<SegmentKey> = None;
        for _ in 0..5000 {
            let occupied_before: Vec<_> = b.occupied_segments().collect();
            let roll = rng.gen_range(0..10);
            if roll < 8 {
                // leave the previous segment before entering the next, like a pointer would
                if let Some(prev) = hovered.take() {
                    b.hover(prev);
                }
                let key = SegmentKey::new(
                    rng.gen_range(-1..10),
                    rng.gen_range(-1..10),
                    Orientation::from_index(rng.gen_range(0..3)),
                );
                if let Some(p) = b.hover(key) {
                    assert_eq!(p.iter().count(), PLACEMENT_SIZE);
                    assert!(p.iter().all(|k| b.lookup(k).unwrap().is_selected()));
                    hovered = Some(key);
                }
            } else {
                let selected: Vec<_> = b.selected_segments().collect();
                let placed = b.commit();
                assert_eq!(placed, selected);
                hovered = None;
            }
            assert!(b.selected_segments().count() <= PLACEMENT_SIZE);
            for k in occupied_before {
                let s = b.lookup(k).unwrap();
                assert!(s.is_occupied());
                assert!(!s.is_selected());
            }
        }
    }
}
