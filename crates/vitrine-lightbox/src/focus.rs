//! The two-state focus machine.

use serde::{Deserialize, Serialize};
use vitrine_domain::{Faceted, ItemId};

use crate::error::{LightboxError, Result};

/// Step direction within the visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Next,
    Prev,
}

/// At most one focused item, identified by id.
///
/// Transitions:
/// - `Idle --open(id)--> Focused(id)`
/// - `Focused(x) --open(id)--> Focused(id)`
/// - `Focused(x) --close()--> Idle`
/// - `Focused(x) --step(dir)--> Focused(y)` with circular wrap
/// - `Idle --step(dir)--> Idle` (no-op)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Focus {
    #[default]
    Idle,
    Focused(ItemId),
}

impl Focus {
    pub fn is_idle(&self) -> bool {
        matches!(self, Focus::Idle)
    }

    /// Id of the focused item, if any.
    pub fn focused_id(&self) -> Option<ItemId> {
        match self {
            Focus::Idle => None,
            Focus::Focused(id) => Some(*id),
        }
    }

    /// Focus `id`. The caller contract requires `id` to be a member of
    /// `visible`; a violation is reported instead of accepted.
    pub fn open<T: Faceted>(&mut self, visible: &[&T], id: ItemId) -> Result<()> {
        if !visible.iter().any(|item| item.id() == id) {
            return Err(LightboxError::NotVisible(id));
        }
        *self = Focus::Focused(id);
        Ok(())
    }

    /// Clear focus unconditionally. Idempotent.
    pub fn close(&mut self) {
        *self = Focus::Idle;
    }

    /// Move focus one step within `visible`, wrapping at both ends.
    ///
    /// No-op from `Idle`. With a single visible item this reselects the
    /// same item. If the focused item has left the visible set, focus
    /// closes rather than guessing at an index.
    pub fn step<T: Faceted>(&mut self, visible: &[&T], direction: Direction) {
        let Focus::Focused(id) = *self else {
            return;
        };
        let Some(index) = visible.iter().position(|item| item.id() == id) else {
            *self = Focus::Idle;
            return;
        };
        let n = visible.len();
        let next = match direction {
            Direction::Next => (index + 1) % n,
            Direction::Prev => (index + n - 1) % n,
        };
        *self = Focus::Focused(visible[next].id());
    }

    /// 1-based position of the focused item and the visible count, for the
    /// `3 / 12` overlay footer.
    pub fn position<T: Faceted>(&self, visible: &[&T]) -> Option<(usize, usize)> {
        let id = self.focused_id()?;
        let index = visible.iter().position(|item| item.id() == id)?;
        Some((index + 1, visible.len()))
    }

    /// Close focus when the focused item is no longer visible.
    ///
    /// Called after every filter mutation so focus always refers to a
    /// member of the current visible set.
    pub fn retain_visible<T: Faceted>(&mut self, visible: &[&T]) {
        if let Focus::Focused(id) = *self {
            if !visible.iter().any(|item| item.id() == id) {
                *self = Focus::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Photo {
        id: ItemId,
    }

    impl Faceted for Photo {
        fn id(&self) -> ItemId {
            self.id
        }

        fn dimension_value(&self, _dimension: &str) -> Option<&str> {
            None
        }
    }

    fn photos(ids: &[ItemId]) -> Vec<Photo> {
        ids.iter().map(|&id| Photo { id }).collect()
    }

    #[test]
    fn open_requires_membership() {
        let items = photos(&[1, 2, 3]);
        let visible: Vec<&Photo> = items.iter().collect();
        let mut focus = Focus::Idle;

        assert_eq!(focus.open(&visible, 9), Err(LightboxError::NotVisible(9)));
        assert!(focus.is_idle());

        focus.open(&visible, 2).unwrap();
        assert_eq!(focus.focused_id(), Some(2));
    }

    #[test]
    fn open_replaces_existing_focus() {
        let items = photos(&[1, 2]);
        let visible: Vec<&Photo> = items.iter().collect();
        let mut focus = Focus::Idle;
        focus.open(&visible, 1).unwrap();
        focus.open(&visible, 2).unwrap();
        assert_eq!(focus.focused_id(), Some(2));
    }

    #[test]
    fn close_is_idempotent() {
        let items = photos(&[1]);
        let visible: Vec<&Photo> = items.iter().collect();
        let mut focus = Focus::Idle;
        focus.open(&visible, 1).unwrap();
        focus.close();
        assert!(focus.is_idle());
        focus.close();
        assert!(focus.is_idle());
    }

    #[test]
    fn step_from_idle_is_a_no_op() {
        let items = photos(&[1, 2]);
        let visible: Vec<&Photo> = items.iter().collect();
        let mut focus = Focus::Idle;
        focus.step(&visible, Direction::Next);
        assert!(focus.is_idle());
    }

    #[test]
    fn step_wraps_at_both_ends() {
        let items = photos(&[1, 2, 3]);
        let visible: Vec<&Photo> = items.iter().collect();
        let mut focus = Focus::Idle;

        focus.open(&visible, 3).unwrap();
        focus.step(&visible, Direction::Next);
        assert_eq!(focus.focused_id(), Some(1));

        focus.step(&visible, Direction::Prev);
        assert_eq!(focus.focused_id(), Some(3));
    }

    #[test]
    fn step_with_one_item_reselects_it() {
        let items = photos(&[7]);
        let visible: Vec<&Photo> = items.iter().collect();
        let mut focus = Focus::Idle;
        focus.open(&visible, 7).unwrap();
        focus.step(&visible, Direction::Next);
        assert_eq!(focus.focused_id(), Some(7));
        focus.step(&visible, Direction::Prev);
        assert_eq!(focus.focused_id(), Some(7));
    }

    #[test]
    fn step_closes_stale_focus() {
        let items = photos(&[1, 2, 3]);
        let visible: Vec<&Photo> = items.iter().collect();
        let mut focus = Focus::Idle;
        focus.open(&visible, 2).unwrap();

        let narrowed = photos(&[1, 3]);
        let narrowed: Vec<&Photo> = narrowed.iter().collect();
        focus.step(&narrowed, Direction::Next);
        assert!(focus.is_idle());
    }

    #[test]
    fn retain_visible_closes_on_filter_change() {
        let items = photos(&[1, 2, 3]);
        let visible: Vec<&Photo> = items.iter().collect();
        let mut focus = Focus::Idle;
        focus.open(&visible, 2).unwrap();

        focus.retain_visible(&visible);
        assert_eq!(focus.focused_id(), Some(2));

        let narrowed = photos(&[1, 3]);
        let narrowed: Vec<&Photo> = narrowed.iter().collect();
        focus.retain_visible(&narrowed);
        assert!(focus.is_idle());
    }

    #[test]
    fn position_is_one_based() {
        let items = photos(&[10, 20, 30]);
        let visible: Vec<&Photo> = items.iter().collect();
        let mut focus = Focus::Idle;
        assert_eq!(focus.position(&visible), None);
        focus.open(&visible, 20).unwrap();
        assert_eq!(focus.position(&visible), Some((2, 3)));
    }

    proptest! {
        #[test]
        fn stepping_next_n_times_returns_to_start(len in 1usize..24, start in 0usize..24) {
            let ids: Vec<ItemId> = (1..=len as ItemId).collect();
            let items = photos(&ids);
            let visible: Vec<&Photo> = items.iter().collect();
            let start = ids[start % len];

            let mut focus = Focus::Idle;
            focus.open(&visible, start).unwrap();
            for _ in 0..len {
                focus.step(&visible, Direction::Next);
            }
            prop_assert_eq!(focus.focused_id(), Some(start));
        }

        #[test]
        fn prev_then_next_is_identity(len in 2usize..24, start in 0usize..24) {
            let ids: Vec<ItemId> = (1..=len as ItemId).collect();
            let items = photos(&ids);
            let visible: Vec<&Photo> = items.iter().collect();
            let start = ids[start % len];

            let mut focus = Focus::Idle;
            focus.open(&visible, start).unwrap();
            focus.step(&visible, Direction::Prev);
            focus.step(&visible, Direction::Next);
            prop_assert_eq!(focus.focused_id(), Some(start));
        }
    }
}
