//! Horizontal scrolling of the text field.
//!
//! The field shows a fixed number of character cells. [`Viewport`] owns the
//! cursor and the leftmost visible index and moves them together one step at
//! a time, so the text scrolls smoothly and the cursor never leaves view.
//! [`VisibleWindow`] turns that state into what a renderer draws.

use std::ops::Range;

/// Cursor position plus horizontal scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    cursor: usize,
    first_visible: usize,
}

impl Viewport {
    /// Cursor after `len` characters, scrolled so it is in view.
    pub fn at_end(len: usize, width: usize) -> Self {
        Self {
            cursor: len,
            first_visible: len.saturating_sub(width),
        }
    }

    /// Insertion point, in `[0, len]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Leftmost buffer index in view.
    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    /// Moves the cursor one step right, scrolling once it comes within
    /// `margin` cells of the right edge. Returns whether the cursor moved.
    ///
    /// A `margin` of `width` or more scrolls on every step past the first.
    pub fn advance(&mut self, len: usize, width: usize, margin: usize) -> bool {
        if self.cursor >= len {
            return false;
        }
        self.cursor += 1;
        if len > width
            && self.cursor - self.first_visible > width.saturating_sub(margin)
            && self.first_visible < len - width
        {
            self.first_visible += 1;
        }
        true
    }

    /// Moves the cursor one step left, scrolling when it reaches the left
    /// edge. Returns whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        if self.cursor <= self.first_visible && self.first_visible > 0 {
            self.first_visible -= 1;
        }
        true
    }

    /// Pulls the scroll offset back after the content shrank.
    pub fn clamp(&mut self, len: usize, width: usize) {
        self.cursor = self.cursor.min(len);
        self.first_visible = self
            .first_visible
            .min(len.saturating_sub(width))
            .min(self.cursor);
    }

    /// The cells a renderer should draw for `len` characters.
    pub fn window(&self, len: usize, width: usize) -> VisibleWindow {
        let mut start = self.first_visible;
        if width > 0 && self.cursor - start >= width {
            start = self.cursor + 1 - width;
        }
        VisibleWindow {
            start,
            chars: start..len.min(start + width),
            cursor_cell: self.cursor - start,
            scroll_left: start > 0,
            scroll_right: len > start + width,
        }
    }
}

/// What the text field shows.
///
/// The cursor always occupies one of the window's cells. When it sits after
/// the last character of a long buffer the window is shifted one further than
/// the scroll offset so that cell stays on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleWindow {
    /// Buffer index shown in cell 0.
    pub start: usize,
    /// Buffer indices with a character drawn.
    pub chars: Range<usize>,
    /// Cell holding the cursor; the caret is drawn at its leading edge.
    pub cursor_cell: usize,
    /// Content is hidden to the left.
    pub scroll_left: bool,
    /// Content is hidden to the right.
    pub scroll_right: bool,
}

impl VisibleWindow {
    /// The visible slice of `text`.
    pub fn slice<'t>(&self, text: &'t [u8]) -> &'t [u8] {
        let end = self.chars.end.min(text.len());
        &text[self.chars.start.min(end)..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = 16;
    const MARGIN: usize = 2;

    fn walk_to_end(vp: &mut Viewport, len: usize) {
        while vp.advance(len, W, MARGIN) {}
    }

    #[test]
    fn short_text_never_scrolls() {
        let mut vp = Viewport::default();
        walk_to_end(&mut vp, 10);
        assert_eq!(vp.cursor(), 10);
        assert_eq!(vp.first_visible(), 0);
    }

    #[test]
    fn seventeen_chars_scroll_by_exactly_one() {
        let mut vp = Viewport::default();
        walk_to_end(&mut vp, 17);
        assert_eq!(vp.cursor(), 17);
        assert_eq!(vp.first_visible(), 1);
    }

    #[test]
    fn scroll_offset_is_capped_by_length() {
        let mut vp = Viewport::default();
        walk_to_end(&mut vp, 40);
        assert_eq!(vp.first_visible(), 40 - W);
        assert!(!vp.advance(40, W, MARGIN));
        assert_eq!(vp.first_visible(), 40 - W);
    }

    #[test]
    fn margin_wider_than_window_still_scrolls() {
        let mut vp = Viewport::default();
        while vp.advance(10, 2, 5) {
            assert!(vp.cursor() <= vp.first_visible() + 2);
        }
        assert_eq!(vp.cursor(), 10);
        assert_eq!(vp.first_visible(), 8);
    }

    #[test]
    fn retreat_scrolls_back_one_step_at_a_time() {
        let mut vp = Viewport::at_end(40, W);
        let mut last = vp.first_visible();
        while vp.retreat() {
            assert!(last - vp.first_visible() <= 1);
            assert!(vp.first_visible() <= vp.cursor());
            last = vp.first_visible();
        }
        assert_eq!(vp.cursor(), 0);
        assert_eq!(vp.first_visible(), 0);
    }

    #[test]
    fn clamp_after_shrink() {
        let mut vp = Viewport::at_end(20, W);
        assert_eq!(vp.first_visible(), 4);
        vp.clamp(19, W);
        assert_eq!(vp.cursor(), 19);
        assert_eq!(vp.first_visible(), 3);
        vp.clamp(5, W);
        assert_eq!(vp.first_visible(), 0);
    }

    #[test]
    fn window_gives_the_end_cursor_its_own_cell() {
        let vp = Viewport::at_end(17, W);
        let win = vp.window(17, W);
        assert_eq!(win.start, 2);
        assert_eq!(win.cursor_cell, W - 1);
        assert_eq!(win.chars, 2..17);
        assert!(win.scroll_left);
        assert!(!win.scroll_right);
    }

    #[test]
    fn window_at_start_of_long_text() {
        let vp = Viewport::default();
        let win = vp.window(30, W);
        assert_eq!(win.start, 0);
        assert_eq!(win.chars, 0..W);
        assert_eq!(win.cursor_cell, 0);
        assert!(!win.scroll_left);
        assert!(win.scroll_right);
        assert_eq!(win.slice(b"0123456789abcdefghijklmnopqrst"), b"0123456789abcdef");
    }

    #[test]
    fn window_for_short_text() {
        let vp = Viewport::at_end(3, W);
        let win = vp.window(3, W);
        assert_eq!(win.chars, 0..3);
        assert_eq!(win.cursor_cell, 3);
        assert!(!win.scroll_left && !win.scroll_right);
        assert_eq!(win.slice(b"[0x"), b"[0x");
    }
}
