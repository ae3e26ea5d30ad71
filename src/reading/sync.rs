//! Dual-pane synchronization state.
//!
//! The controller owns the verse-number -> element bookkeeping for both text
//! panes: which verses exist in each pane (rebuilt on every chapter render),
//! which single verse is highlighted, which element carries the visual
//! "selected" mark, and which pane still owes a scroll. The egui layer feeds
//! it layout facts (viewport and per-verse rects) each frame and asks it, per
//! just-laid-out element, whether that element should be scrolled into view.
//! A scroll therefore fires only once the target actually has a layout.

use egui::Rect;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSide {
    Original,
    Translation,
}

#[derive(Debug, Default)]
pub struct PaneMap {
    order: Vec<u32>,
    index: HashMap<u32, usize>,
    rects: HashMap<u32, Rect>,
    viewport: Option<Rect>,
    scroll_target: Option<u32>,
}

impl PaneMap {
    fn rebuild(&mut self, order: Vec<u32>) {
        self.index = order
            .iter()
            .enumerate()
            .map(|(position, verse)| (*verse, position))
            .collect();
        self.order = order;
        self.rects.clear();
        self.viewport = None;
        self.scroll_target = None;
    }

    pub fn contains(&self, verse: u32) -> bool {
        self.index.contains_key(&verse)
    }

    pub fn verse_numbers(&self) -> &[u32] {
        &self.order
    }

    /// First verse whose vertical extent lies fully inside the pane's
    /// visible viewport, in pane order.
    fn first_fully_visible(&self) -> Option<u32> {
        let viewport = self.viewport?;
        self.order.iter().copied().find(|verse| {
            self.rects
                .get(verse)
                .is_some_and(|rect| rect.top() >= viewport.top() && rect.bottom() <= viewport.bottom())
        })
    }
}

#[derive(Debug, Default)]
pub struct SyncController {
    original: PaneMap,
    translation: PaneMap,
    highlighted: Option<u32>,
    selected: Option<u32>,
}

impl SyncController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset both pane maps for a fresh chapter render. All element state
    /// (highlight, selection, pending scrolls, layout facts) starts over.
    pub fn rebuild(&mut self, original_order: Vec<u32>, translation_order: Vec<u32>) {
        self.original.rebuild(original_order);
        self.translation.rebuild(translation_order);
        self.highlighted = None;
        self.selected = None;
    }

    pub fn pane(&self, side: PaneSide) -> &PaneMap {
        match side {
            PaneSide::Original => &self.original,
            PaneSide::Translation => &self.translation,
        }
    }

    fn pane_mut(&mut self, side: PaneSide) -> &mut PaneMap {
        match side {
            PaneSide::Original => &mut self.original,
            PaneSide::Translation => &mut self.translation,
        }
    }

    /// Highlight `verse` in both panes and queue a scroll in each pane that
    /// actually contains it. The previous highlight is dropped atomically for
    /// both panes (there is only ever the one value).
    pub fn select_verse(&mut self, verse: u32) {
        self.highlighted = Some(verse);
        for side in [PaneSide::Original, PaneSide::Translation] {
            let pane = self.pane_mut(side);
            pane.scroll_target = if pane.contains(verse) { Some(verse) } else { None };
        }
    }

    /// Visual "selected" mark, independent of highlight. No scroll.
    pub fn mark_selected(&mut self, verse: u32) {
        self.selected = Some(verse);
    }

    pub fn highlighted(&self) -> Option<u32> {
        self.highlighted
    }

    pub fn is_highlighted(&self, verse: u32) -> bool {
        self.highlighted == Some(verse)
    }

    pub fn is_selected(&self, verse: u32) -> bool {
        self.selected == Some(verse)
    }

    /// Start a pane's frame: record the visible viewport and forget the
    /// previous frame's element rects.
    pub fn begin_pane_frame(&mut self, side: PaneSide, viewport: Rect) {
        let pane = self.pane_mut(side);
        pane.viewport = Some(viewport);
        pane.rects.clear();
    }

    /// Record where a verse element ended up this frame.
    pub fn note_rendered(&mut self, side: PaneSide, verse: u32, rect: Rect) {
        self.pane_mut(side).rects.insert(verse, rect);
    }

    /// Consume the pane's pending scroll if it targets this just-laid-out
    /// element. Returns true at most once per queued scroll.
    pub fn take_scroll(&mut self, side: PaneSide, verse: u32) -> bool {
        let pane = self.pane_mut(side);
        if pane.scroll_target == Some(verse) {
            pane.scroll_target = None;
            true
        } else {
            false
        }
    }

    /// The verse to restore after a re-render: the current highlight if any,
    /// else the first fully visible verse, translation pane first.
    pub fn anchor_verse(&self) -> Option<u32> {
        self.highlighted
            .or_else(|| self.translation.first_fully_visible())
            .or_else(|| self.original.first_fully_visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn rect(top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(100.0, bottom))
    }

    fn controller() -> SyncController {
        let mut sync = SyncController::new();
        sync.rebuild(vec![1, 2, 3, 4], vec![1, 2, 4]);
        sync
    }

    #[test]
    fn select_verse_highlights_exactly_one() {
        let mut sync = controller();
        sync.select_verse(2);
        sync.select_verse(3);
        assert!(sync.is_highlighted(3));
        assert!(!sync.is_highlighted(2));
        assert_eq!(sync.highlighted(), Some(3));
    }

    #[test]
    fn select_verse_is_idempotent() {
        let mut sync = controller();
        sync.select_verse(2);
        sync.select_verse(2);
        assert_eq!(sync.highlighted(), Some(2));
        // One queued scroll per pane, consumable once.
        assert!(sync.take_scroll(PaneSide::Original, 2));
        assert!(!sync.take_scroll(PaneSide::Original, 2));
        assert!(sync.take_scroll(PaneSide::Translation, 2));
    }

    #[test]
    fn verse_missing_from_one_pane_scrolls_only_the_present_side() {
        let mut sync = controller();
        // Verse 3 exists only in the original pane.
        sync.select_verse(3);
        assert!(sync.take_scroll(PaneSide::Original, 3));
        assert!(!sync.take_scroll(PaneSide::Translation, 3));
        assert!(sync.is_highlighted(3));
    }

    #[test]
    fn scroll_is_consumed_only_by_the_target_verse() {
        let mut sync = controller();
        sync.select_verse(4);
        assert!(!sync.take_scroll(PaneSide::Original, 1));
        assert!(sync.take_scroll(PaneSide::Original, 4));
    }

    #[test]
    fn selection_mark_is_independent_and_scroll_free() {
        let mut sync = controller();
        sync.mark_selected(2);
        assert!(sync.is_selected(2));
        assert!(!sync.is_highlighted(2));
        assert!(!sync.take_scroll(PaneSide::Original, 2));
        sync.mark_selected(4);
        assert!(!sync.is_selected(2));
        assert!(sync.is_selected(4));
    }

    #[test]
    fn anchor_prefers_highlight_over_visibility() {
        let mut sync = controller();
        sync.begin_pane_frame(PaneSide::Translation, rect(0.0, 100.0));
        sync.note_rendered(PaneSide::Translation, 1, rect(10.0, 40.0));
        sync.select_verse(4);
        assert_eq!(sync.anchor_verse(), Some(4));
    }

    #[test]
    fn anchor_falls_back_to_first_fully_visible_translation_verse() {
        let mut sync = controller();
        sync.begin_pane_frame(PaneSide::Translation, rect(50.0, 150.0));
        // Verse 1 is clipped at the top, verse 2 fully visible.
        sync.note_rendered(PaneSide::Translation, 1, rect(30.0, 70.0));
        sync.note_rendered(PaneSide::Translation, 2, rect(75.0, 120.0));
        sync.begin_pane_frame(PaneSide::Original, rect(0.0, 100.0));
        sync.note_rendered(PaneSide::Original, 1, rect(0.0, 50.0));
        assert_eq!(sync.anchor_verse(), Some(2));
    }

    #[test]
    fn anchor_checks_original_pane_when_translation_has_none_visible() {
        let mut sync = controller();
        sync.begin_pane_frame(PaneSide::Translation, rect(0.0, 50.0));
        sync.note_rendered(PaneSide::Translation, 1, rect(20.0, 80.0));
        sync.begin_pane_frame(PaneSide::Original, rect(0.0, 100.0));
        sync.note_rendered(PaneSide::Original, 2, rect(10.0, 60.0));
        assert_eq!(sync.anchor_verse(), Some(2));
    }

    #[test]
    fn rebuild_clears_highlight_selection_and_scrolls() {
        let mut sync = controller();
        sync.select_verse(2);
        sync.mark_selected(2);
        sync.rebuild(vec![1, 2], vec![1, 2]);
        assert_eq!(sync.highlighted(), None);
        assert!(!sync.is_selected(2));
        assert!(!sync.take_scroll(PaneSide::Original, 2));
    }

    #[test]
    fn pane_order_is_exposed_for_the_jump_selector() {
        let sync = controller();
        assert_eq!(sync.pane(PaneSide::Original).verse_numbers(), &[1, 2, 3, 4]);
        assert!(sync.pane(PaneSide::Translation).contains(4));
        assert!(!sync.pane(PaneSide::Translation).contains(3));
    }
}
