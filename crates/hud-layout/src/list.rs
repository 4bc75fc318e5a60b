//! Fixed-height item lists with scrolling, hover and hit-testing
//!
//! Item heights are device pixels; they do not scale with the layout.

use std::ops::Range;

/// Mode menu row height
pub const MODE_ITEM_HEIGHT: i32 = 36;
/// City menu row height
pub const CITY_ITEM_HEIGHT: i32 = 32;

/// Vertical list of text rows
/// INVARIANT: offset is in [0, max(0, len - visible_count)] for the last known height
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<String>,
    item_height: i32,
    offset: usize,
    hover: Option<usize>,
}

impl ItemList {
    pub fn new<I, S>(items: I, item_height: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            item_height: item_height.max(1),
            offset: 0,
            hover: None,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_height(&self) -> i32 {
        self.item_height
    }

    /// First visible row
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// Rows that fit in the given device height; at least one
    pub fn visible_count(&self, device_height: i32) -> usize {
        (device_height / self.item_height).max(1) as usize
    }

    pub fn max_offset(&self, device_height: i32) -> usize {
        self.items.len().saturating_sub(self.visible_count(device_height))
    }

    /// Apply wheel rotation (positive scrolls down), clamped to the valid range
    ///
    /// Moving the rows drops the hover; the next pointer move sets it again.
    pub fn scroll(&mut self, rotation: i32, device_height: i32) {
        let max = self.max_offset(device_height) as i64;
        let next = (self.offset as i64).saturating_add(rotation as i64).clamp(0, max) as usize;
        if next != self.offset {
            self.offset = next;
            self.hover = None;
        }
    }

    /// Re-clamp after the list's device height changed
    pub fn clamp_offset(&mut self, device_height: i32) {
        self.offset = self.offset.min(self.max_offset(device_height));
    }

    /// Indices drawn for the given device height
    pub fn visible_range(&self, device_height: i32) -> Range<usize> {
        let start = self.offset.min(self.items.len());
        let end = (start + self.visible_count(device_height)).min(self.items.len());
        start..end
    }

    /// Item under a y coordinate local to the list
    pub fn item_at(&self, local_y: i32) -> Option<usize> {
        if local_y < 0 {
            return None;
        }
        let index = self.offset + (local_y / self.item_height) as usize;
        (index < self.items.len()).then_some(index)
    }

    pub fn set_hover(&mut self, local_y: i32) {
        self.hover = self.item_at(local_y);
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cities() -> ItemList {
        ItemList::new((0..14).map(|i| format!("City {}", i)), CITY_ITEM_HEIGHT)
    }

    #[test]
    fn test_visible_count_at_least_one() {
        let list = cities();
        assert_eq!(list.visible_count(420), 13);
        assert_eq!(list.visible_count(10), 1);
        assert_eq!(list.visible_count(0), 1);
    }

    #[test]
    fn test_scroll_drops_hover() {
        let mut list = cities();
        list.set_hover(40);
        assert_eq!(list.hover(), Some(1));

        // Already at the top: rows did not move
        list.scroll(-1, 64);
        assert_eq!(list.hover(), Some(1));

        list.scroll(3, 64);
        assert_eq!(list.offset(), 3);
        assert_eq!(list.hover(), None);
    }

    #[test]
    fn test_scroll_clamps() {
        let mut list = cities();
        // 420px shows 13 of 14 rows
        list.scroll(5, 420);
        assert_eq!(list.offset(), 1);
        list.scroll(-100, 420);
        assert_eq!(list.offset(), 0);
        list.scroll(i32::MAX, 32);
        assert_eq!(list.offset(), 13);
    }

    #[test]
    fn test_no_scroll_when_everything_fits() {
        let mut list = ItemList::new(["SIM x1", "SIM x10"], MODE_ITEM_HEIGHT);
        list.scroll(3, 320);
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn test_item_at_respects_offset() {
        let mut list = cities();
        assert_eq!(list.item_at(0), Some(0));
        assert_eq!(list.item_at(33), Some(1));
        assert_eq!(list.item_at(-1), None);

        list.scroll(10, 64);
        assert_eq!(list.offset(), 10);
        assert_eq!(list.item_at(40), Some(11));
        assert_eq!(list.item_at(32 * 4), None);
    }

    #[test]
    fn test_visible_range() {
        let mut list = cities();
        assert_eq!(list.visible_range(128), 0..4);
        list.scroll(20, 128);
        assert_eq!(list.visible_range(128), 10..14);
    }

    #[test]
    fn test_clamp_offset_after_grow() {
        let mut list = cities();
        list.scroll(20, 32);
        assert_eq!(list.offset(), 13);
        list.clamp_offset(448);
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn test_hover() {
        let mut list = cities();
        list.set_hover(70);
        assert_eq!(list.hover(), Some(2));
        list.set_hover(10_000);
        assert_eq!(list.hover(), None);
        list.set_hover(0);
        list.clear_hover();
        assert_eq!(list.hover(), None);
    }

    proptest! {
        #[test]
        fn prop_scroll_offset_in_range(
            wheel in proptest::collection::vec(any::<i32>(), 1..32),
            height in 0i32..2000,
        ) {
            let mut list = cities();
            for rotation in wheel {
                list.scroll(rotation, height);
                let max = list.len().saturating_sub(list.visible_count(height));
                prop_assert!(list.offset() <= max);
            }
        }
    }
}
